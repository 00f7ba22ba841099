//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod combat;
pub mod entity;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod upgrade;

pub use autopilot::autopilot;
pub use combat::{Arrow, RangedAttack};
pub use entity::{Bounds, Enemy, Orb, separate_all};
pub use player::{Player, PlayerClass, PlayerStats, SprintState};
pub use spawn::{SpawnTimer, sample_spawn_point};
pub use state::{GameState, RunStats};
pub use tick::{TickInput, TickOutcome, tick};
pub use upgrade::{StatEffect, UpgradeError, UpgradeKind, UpgradeSlot, UpgradeTable, effect};
