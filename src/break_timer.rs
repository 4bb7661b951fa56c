//! Break timer shown across the menu scenes after a mission
//!
//! Counts down while active, then sits in a "ready" state until the player
//! starts the next mission.

use std::f32::consts::TAU;

/// Result of a finished mission, carried into the break banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionReport {
    pub task_name: String,
    pub fragments: u32,
}

/// Pulses per second of the "ready" indicator
const READY_PULSE_HZ: f32 = 0.8;

#[derive(Debug, Clone, Default)]
pub struct BreakTimer {
    active: bool,
    remaining: f32,
    ready: bool,
    ready_elapsed: f32,
    report: MissionReport,
}

impl BreakTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a break of `seconds` after the given mission
    pub fn start(&mut self, seconds: f32, report: MissionReport) {
        log::info!(
            "Break started ({:.0}s) after '{}' (+{} fragments)",
            seconds,
            report.task_name,
            report.fragments
        );
        self.active = true;
        self.remaining = seconds.max(0.0);
        self.ready = false;
        self.ready_elapsed = 0.0;
        self.report = report;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        if self.ready {
            self.ready_elapsed += dt;
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.ready = true;
            self.ready_elapsed = 0.0;
            log::info!("Break over - ready for mission");
        }
    }

    /// Clear the break unconditionally (a new mission is starting)
    pub fn dismiss(&mut self) {
        self.active = false;
        self.ready = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn report(&self) -> &MissionReport {
        &self.report
    }

    /// Opacity (0-255) of the pulsing "ready" label
    pub fn pulse_alpha(&self) -> u8 {
        let t = self.ready_elapsed * READY_PULSE_HZ * TAU;
        let wave = 0.5 + 0.5 * t.sin();
        (100.0 + (155.0 * wave).floor()).clamp(0.0, 255.0) as u8
    }
}
