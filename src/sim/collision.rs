//! Hit tests for the mission scene
//!
//! Everything here is circle-vs-point against the asteroid center or the ship.

use glam::Vec2;

use crate::consts::{ASTEROID_HIT_RADIUS, ORBIT_RADIUS};
use crate::polar_to_cartesian;

/// Distance from the center past which stray projectiles are dropped
pub const PROJECTILE_CULL_RADIUS: f32 = ORBIT_RADIUS * 2.0;

/// Strictly inside a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) < radius * radius
}

/// Did a projectile at `pos` strike the asteroid?
#[inline]
pub fn projectile_hits_asteroid(pos: Vec2, center: Vec2) -> bool {
    point_in_circle(pos, center, ASTEROID_HIT_RADIUS)
}

/// Has a projectile left the play area around the asteroid?
#[inline]
pub fn projectile_escaped(pos: Vec2, center: Vec2) -> bool {
    !point_in_circle(pos, center, PROJECTILE_CULL_RADIUS)
}

/// Point on the asteroid surface at `angle`
#[inline]
pub fn asteroid_surface_point(center: Vec2, angle: f32) -> Vec2 {
    center + polar_to_cartesian(ASTEROID_HIT_RADIUS, angle)
}
