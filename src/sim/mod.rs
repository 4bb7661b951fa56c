//! Mission simulation
//!
//! All gameplay logic for a single mission lives here:
//! - Variable timestep (`tick(state, dt)`)
//! - Seeded RNG per mission
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod fragment;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use fragment::{Fragment, Magnet};
pub use projectile::Projectile;
pub use ship::{Ship, ShipMode};
pub use state::{Loadout, MissionPhase, MissionState};
pub use tick::{TickReport, tick};
