//! The mining ship
//!
//! Orbits the asteroid at a fixed radius. A burst is triggered externally by
//! `start_shooting`; while shooting the ship slows down, aims at the center and
//! releases one bullet per `should_fire` poll at `BURST_INTERVAL` pace.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::polar_to_cartesian;

/// Ship mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipMode {
    Orbiting,
    Shooting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Orbit center (the asteroid)
    pub center: Vec2,
    /// Current orbit angle (radians)
    pub angle: f32,
    /// Orbit speed while not shooting (radians per second)
    pub base_speed: f32,
    pub pos: Vec2,
    pub mode: ShipMode,
    bullets_remaining: u32,
    burst_timer: f32,
}

impl Ship {
    pub fn new(center: Vec2, base_speed: f32) -> Self {
        Self {
            center,
            angle: 0.0,
            base_speed,
            pos: center + Vec2::new(ORBIT_RADIUS, 0.0),
            mode: ShipMode::Orbiting,
            bullets_remaining: 0,
            burst_timer: 0.0,
        }
    }

    /// Begin a burst of `bullet_count` bullets; the first is ready immediately
    pub fn start_shooting(&mut self, bullet_count: u32) {
        if bullet_count == 0 {
            return;
        }
        self.mode = ShipMode::Shooting;
        self.bullets_remaining = bullet_count;
        self.burst_timer = 0.0;
    }

    pub fn is_shooting(&self) -> bool {
        self.mode == ShipMode::Shooting
    }

    pub fn bullets_remaining(&self) -> u32 {
        self.bullets_remaining
    }

    /// Current angular speed (slower while shooting)
    pub fn angular_speed(&self) -> f32 {
        match self.mode {
            ShipMode::Orbiting => self.base_speed,
            ShipMode::Shooting => self.base_speed * SHOOTING_SPEED_MULT,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.angle += self.angular_speed() * dt;
        self.pos = self.center + polar_to_cartesian(ORBIT_RADIUS, self.angle);

        if self.mode == ShipMode::Shooting {
            self.burst_timer -= dt;
        }
    }

    /// Heading in radians: along the orbit, or at the center while shooting
    pub fn facing(&self) -> f32 {
        match self.mode {
            ShipMode::Orbiting => self.angle + FRAC_PI_2,
            ShipMode::Shooting => {
                let to_center = self.center - self.pos;
                to_center.y.atan2(to_center.x)
            }
        }
    }

    /// True once per bullet in the burst, at most once per call
    pub fn should_fire(&mut self) -> bool {
        if self.mode != ShipMode::Shooting || self.bullets_remaining == 0 {
            return false;
        }
        if self.burst_timer > 0.0 {
            return false;
        }
        self.bullets_remaining -= 1;
        self.burst_timer = BURST_INTERVAL;
        if self.bullets_remaining == 0 {
            self.mode = ShipMode::Orbiting;
        }
        true
    }

    /// Triangle hull: nose along the facing, two rear corners
    pub fn hull_points(&self) -> [Vec2; 3] {
        let f = self.facing();
        let rear = SHIP_SIZE * 0.7;
        [
            self.pos + polar_to_cartesian(SHIP_SIZE, f),
            self.pos + polar_to_cartesian(rear, f + 2.4),
            self.pos + polar_to_cartesian(rear, f - 2.4),
        ]
    }
}
