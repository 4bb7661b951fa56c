//! Bullets fired from the ship at the asteroid

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PROJECTILE_SPEED;
use crate::{direction_and_distance, polar_to_cartesian};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alive: bool,
}

impl Projectile {
    /// Projectile at `from` travelling toward `target` at `PROJECTILE_SPEED`
    pub fn aimed_at(from: Vec2, target: Vec2) -> Self {
        let (dir, _) = direction_and_distance(from, target);
        Self {
            pos: from,
            vel: dir * PROJECTILE_SPEED,
            alive: true,
        }
    }

    /// Aim at `center`, rotated by `spread` radians around the shooter.
    ///
    /// The aim point keeps the shooter-to-center distance, so a zero spread
    /// lands dead center.
    pub fn with_spread(from: Vec2, center: Vec2, spread: f32) -> Self {
        let (dir, dist) = direction_and_distance(from, center);
        let base_angle = dir.y.atan2(dir.x);
        let target = from + polar_to_cartesian(dist, base_angle + spread);
        Self::aimed_at(from, target)
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}
