//! Pomodoro Miner - a pomodoro timer that plays out as an orbital mining game
//!
//! Core modules:
//! - `sim`: Mission simulation (ship, projectiles, fragments, countdown)
//! - `scenes`: Scene state machine (intro, menu, talents, settings, story, mission, abort, fades)
//! - `game`: Top-level orchestrator (shared context, break timer, deferred events, audio gating)
//! - `talents`: Upgrade tree bought with fragments
//! - `renderer`: Primitive drawing contract consumed by scenes
//! - `audio`: Audio manager over a pluggable backend, plus procedural clips
//! - `platform`: Frame pacing and event sources

pub mod audio;
pub mod break_timer;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scenes;
pub mod settings;
pub mod sim;
pub mod talents;
pub mod task;
pub mod timers;

pub use game::{Game, GameContext};
pub use settings::Settings;
pub use talents::{TalentId, TalentTree};
pub use task::{Task, TaskList};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen size
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 600.0;
    /// Target frame rate for the native loop
    pub const FPS: u32 = 60;
    /// Longest single physics step inside a mission tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ship orbit around the asteroid
    pub const ORBIT_RADIUS: f32 = 150.0;
    /// Base orbit speed (radians per second)
    pub const ORBIT_SPEED: f32 = 0.4;
    /// Orbit speed multiplier while a burst is being fired
    pub const SHOOTING_SPEED_MULT: f32 = 0.3;
    pub const SHIP_SIZE: f32 = 12.0;

    /// Seconds between shooting bursts, before the fire rate talent
    pub const SHOOT_INTERVAL_MIN: f32 = 1.0;
    pub const SHOOT_INTERVAL_MAX: f32 = 5.0;
    pub const BASE_BULLET_COUNT: u32 = 2;
    /// Seconds between bullets inside one burst
    pub const BURST_INTERVAL: f32 = 0.12;
    /// Aim jitter either side of the direct line (radians)
    pub const BULLET_SPREAD: f32 = 0.15;
    pub const PROJECTILE_SPEED: f32 = 200.0;
    pub const PROJECTILE_RADIUS: f32 = 3.0;

    /// Asteroid hit radius, also where fragments spawn
    pub const ASTEROID_HIT_RADIUS: f32 = 35.0;
    /// Visual radius of the asteroid polygon
    pub const ASTEROID_DRAW_RADIUS: f32 = 40.0;
    pub const ASTEROID_VERTICES: usize = 14;

    /// Fragment launch speed (upper bound; lower bound is half)
    pub const FRAGMENT_SPEED: f32 = 80.0;
    /// Launch direction jitter (radians)
    pub const FRAGMENT_LAUNCH_JITTER: f32 = 0.3;
    /// Velocity kept per 60 Hz tick
    pub const FRAGMENT_DECEL: f32 = 0.97;
    pub const FRAGMENT_DECEL_RATE: f32 = 60.0;
    /// How strongly fragments drift back to the orbit radius
    pub const ORBIT_SETTLE_STRENGTH: f32 = 40.0;
    pub const MAGNET_RADIUS: f32 = 60.0;
    pub const MAGNET_STRENGTH: f32 = 300.0;
    /// Distance to the ship at which a fragment is collected
    pub const CAPTURE_RADIUS: f32 = 15.0;

    /// Share of collected fragments kept when a mission is aborted
    pub const ABORT_PENALTY: f32 = 0.30;
    /// Delay between mission completion and the break flow (seconds)
    pub const COMPLETE_TO_BREAK_DELAY: f32 = 1.5;
    /// Full length of a fade transition (seconds)
    pub const FADE_DURATION: f32 = 0.5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit vector and distance from `from` to `to`.
///
/// Coincident points report a distance of 1 so callers never divide by zero.
#[inline]
pub fn direction_and_distance(from: Vec2, to: Vec2) -> (Vec2, f32) {
    let delta = to - from;
    let mut dist = delta.length();
    if dist <= f32::EPSILON {
        dist = 1.0;
    }
    (delta / dist, dist)
}

/// Format seconds as `MM:SS`, truncating fractional seconds
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}
