//! Mission state and loadout
//!
//! Everything a single mission attempt owns: countdown, ship, projectiles,
//! fragments, shooting timer and its own seeded RNG.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fragment::{Fragment, Magnet};
use super::projectile::Projectile;
use super::ship::Ship;
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::talents::{TalentId, TalentTree};

/// Mission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    /// Countdown running, ship mining
    Active,
    /// Countdown reached zero; terminal
    Complete,
}

/// Ship parameters after talent bonuses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub orbit_speed: f32,
    pub magnet: Magnet,
    /// Multiplies the random shoot interval (lower fires more often)
    pub shoot_interval_scale: f32,
    pub double_frag_chance: f32,
    pub bullet_count: u32,
}

impl Default for Loadout {
    fn default() -> Self {
        Self::from_talents(&TalentTree::default())
    }
}

impl Loadout {
    pub fn from_talents(talents: &TalentTree) -> Self {
        Self {
            orbit_speed: ORBIT_SPEED * talents.multiplier(TalentId::OrbitSpeed),
            magnet: Magnet {
                radius: MAGNET_RADIUS * talents.multiplier(TalentId::MagnetRange),
                strength: MAGNET_STRENGTH * talents.multiplier(TalentId::FragMagnetStr),
            },
            shoot_interval_scale: 1.0 / talents.multiplier(TalentId::FireRate),
            double_frag_chance: talents.chance(TalentId::DoubleFrag),
            bullet_count: BASE_BULLET_COUNT + talents.chance(TalentId::BulletCount) as u32,
        }
    }
}

/// Complete state of one mission attempt
#[derive(Debug, Clone)]
pub struct MissionState {
    pub center: Vec2,
    /// Full mission length (seconds)
    pub duration: f32,
    /// Countdown (seconds)
    pub remaining: f32,
    /// Fragments collected so far
    pub collected: u32,
    pub phase: MissionPhase,
    pub loadout: Loadout,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub fragments: Vec<Fragment>,
    /// Seconds until the next burst may start
    pub shoot_timer: f32,
    /// Asteroid outline for drawing
    pub asteroid: Vec<Vec2>,
    pub(crate) rng: Pcg32,
}

impl MissionState {
    pub fn new(center: Vec2, duration: f32, loadout: Loadout, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let asteroid = asteroid_outline(center, ASTEROID_DRAW_RADIUS, ASTEROID_VERTICES, &mut rng);
        let mut state = Self {
            center,
            duration,
            remaining: duration,
            collected: 0,
            phase: MissionPhase::Active,
            loadout,
            ship: Ship::new(center, loadout.orbit_speed),
            projectiles: Vec::new(),
            fragments: Vec::new(),
            shoot_timer: 0.0,
            asteroid,
            rng,
        };
        state.roll_shoot_timer();
        state
    }

    /// Draw the next interval between bursts
    pub fn roll_shoot_timer(&mut self) {
        self.shoot_timer = self
            .rng
            .random_range(SHOOT_INTERVAL_MIN..=SHOOT_INTERVAL_MAX)
            * self.loadout.shoot_interval_scale;
    }

    /// Time spent so far (seconds)
    pub fn elapsed(&self) -> f32 {
        self.duration - self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.phase == MissionPhase::Complete
    }

    pub(crate) fn random_angle(&mut self) -> f32 {
        self.rng.random_range(0.0..TAU)
    }

    pub(crate) fn random_spread(&mut self) -> f32 {
        self.rng.random_range(-BULLET_SPREAD..=BULLET_SPREAD)
    }

    pub(crate) fn roll_double_fragment(&mut self) -> bool {
        self.rng.random::<f32>() < self.loadout.double_frag_chance
    }
}

/// Irregular polygon: a circle with radial noise of up to 25%
pub fn asteroid_outline(center: Vec2, base_radius: f32, vertices: usize, rng: &mut impl Rng) -> Vec<Vec2> {
    let jitter = base_radius * 0.25;
    (0..vertices)
        .map(|i| {
            let angle = TAU * i as f32 / vertices as f32;
            let r = base_radius + rng.random_range(-jitter..=jitter);
            center + polar_to_cartesian(r, angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_loadout() {
        let loadout = Loadout::default();
        assert_eq!(loadout.bullet_count, 2);
        assert_eq!(loadout.orbit_speed, ORBIT_SPEED);
        assert_eq!(loadout.magnet.radius, MAGNET_RADIUS);
        assert_eq!(loadout.shoot_interval_scale, 1.0);
        assert_eq!(loadout.double_frag_chance, 0.0);
    }

    #[test]
    fn test_loadout_applies_talents() {
        let mut talents = TalentTree::new();
        talents.add_fragments(100);
        talents.upgrade(TalentId::BulletCount);
        talents.upgrade(TalentId::BulletCount);
        talents.upgrade(TalentId::FireRate);
        talents.upgrade(TalentId::MagnetRange);

        let loadout = Loadout::from_talents(&talents);
        assert_eq!(loadout.bullet_count, 4);
        assert!((loadout.shoot_interval_scale - 1.0 / 1.1).abs() < 1e-6);
        assert!((loadout.magnet.radius - 72.0).abs() < 1e-4);
    }

    #[test]
    fn test_shoot_timer_in_scaled_range() {
        let loadout = Loadout {
            shoot_interval_scale: 0.5,
            ..Loadout::default()
        };
        let mut state = MissionState::new(Vec2::ZERO, 60.0, loadout, 5);
        for _ in 0..100 {
            state.roll_shoot_timer();
            assert!(state.shoot_timer >= 0.5 && state.shoot_timer <= 2.5);
        }
    }

    #[test]
    fn test_asteroid_outline_within_noise() {
        let mut rng = Pcg32::seed_from_u64(1);
        let pts = asteroid_outline(Vec2::ZERO, 40.0, 14, &mut rng);
        assert_eq!(pts.len(), 14);
        for p in pts {
            let r = p.length();
            assert!((30.0 - 1e-3..=50.0 + 1e-3).contains(&r));
        }
    }
}
