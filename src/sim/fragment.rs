//! Asteroid fragments
//!
//! Debris knocked off the asteroid. Velocity is shaped each tick by decay, a
//! pull back toward the orbit radius, and the ship's magnet when in range.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::polar_to_cartesian;

/// Number of palette entries a fragment can pick from
pub const FRAGMENT_PALETTE_LEN: u8 = 4;

/// Magnet parameters, after talents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Magnet {
    pub radius: f32,
    pub strength: f32,
}

impl Default for Magnet {
    fn default() -> Self {
        Self {
            radius: MAGNET_RADIUS,
            strength: MAGNET_STRENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Asteroid center the fragment settles around
    pub center: Vec2,
    pub alive: bool,
    /// Palette index for rendering
    pub color: u8,
    pub size: u8,
}

impl Fragment {
    pub fn new(pos: Vec2, vel: Vec2, center: Vec2) -> Self {
        Self {
            pos,
            vel,
            center,
            alive: true,
            color: 0,
            size: 4,
        }
    }

    /// Launch from `pos` roughly radially outward from `center`
    pub fn spawn(pos: Vec2, center: Vec2, rng: &mut impl Rng) -> Self {
        let away = pos - center;
        let angle = away.y.atan2(away.x)
            + rng.random_range(-FRAGMENT_LAUNCH_JITTER..=FRAGMENT_LAUNCH_JITTER);
        let speed = rng.random_range(FRAGMENT_SPEED * 0.5..=FRAGMENT_SPEED);
        Self {
            color: rng.random_range(0..FRAGMENT_PALETTE_LEN),
            size: rng.random_range(3..=6),
            ..Self::new(pos, polar_to_cartesian(speed, angle), center)
        }
    }

    /// Advance one tick. Returns true if the ship collected this fragment.
    pub fn update(&mut self, dt: f32, ship_pos: Vec2, magnet: Magnet) -> bool {
        // Decay, scaled so a 60 Hz tick keeps FRAGMENT_DECEL of the velocity
        self.vel *= FRAGMENT_DECEL.powf(dt * FRAGMENT_DECEL_RATE);

        // Settle toward the orbit radius
        let from_center = self.pos - self.center;
        let dist_c = from_center.length();
        if dist_c > 0.0 {
            let radial = from_center / dist_c;
            let error = ORBIT_RADIUS - dist_c;
            let settle = ORBIT_SETTLE_STRENGTH * dt;
            self.vel += radial * error * settle / ORBIT_RADIUS;
        }

        // Magnet toward the ship (distance measured before moving)
        let to_ship = ship_pos - self.pos;
        let dist = to_ship.length();
        if dist < magnet.radius && dist > 0.0 {
            self.vel += to_ship / dist * magnet.strength * dt;
        }

        self.pos += self.vel * dt;

        if dist < CAPTURE_RADIUS {
            self.alive = false;
            return true;
        }
        false
    }
}
