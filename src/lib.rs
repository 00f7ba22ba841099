//! Magic Survival - a top-down survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, player, combat, tick pipeline)
//! - `ui`: Screen state machine and widget layout
//! - `renderer`: Renderer-agnostic draw primitives and tessellation
//! - `platform`: Input and clock collaborators
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::Game;
pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Default frame rate of the headless loop
    pub const TARGET_FPS: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Player box is square, positioned by its top-left corner
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_BASE_SPEED: f32 = 5.0;
    pub const PLAYER_BASE_HEALTH: u32 = 100;
    pub const PLAYER_MAX_STAMINA: f32 = 100.0;
    /// Experience needed for the first level-up
    pub const BASE_EXPERIENCE_TO_LEVEL: u32 = 100;
    /// Threshold growth per level-up (floored)
    pub const EXPERIENCE_GROWTH: f32 = 1.5;

    /// Sprint defaults (seconds / multiplier), before upgrades
    pub const SPRINT_DURATION: f32 = 5.0;
    pub const SPRINT_COOLDOWN: f32 = 20.0;
    pub const SPRINT_SPEED_MULTIPLIER: f32 = 2.0;

    /// Orb defaults
    pub const ORB_RADIUS: f32 = 10.0;
    pub const ORB_EXPERIENCE: u32 = 10;
    pub const ORB_SPAWN_INTERVAL: f32 = 0.5;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 15.0;
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    pub const ENEMY_SPAWN_INTERVAL: f32 = 1.5;
    /// Damage dealt to the player by one enemy contact
    pub const ENEMY_CONTACT_DAMAGE: u32 = 10;

    /// Spawn ring around the player
    pub const SPAWN_MIN_DISTANCE: f32 = 500.0;
    pub const SPAWN_MAX_DISTANCE: f32 = 800.0;
    pub const SPAWN_JITTER: i32 = 50;

    /// Every this many levels, enemies speed up and the player gains health
    pub const SCALING_LEVEL_STEP: u32 = 5;
    pub const SCALING_FACTOR: f32 = 1.5;
    pub const MILESTONE_HEALTH_BONUS: u32 = 20;

    /// Arcane Mage arrows
    pub const ARROW_COOLDOWN: f32 = 1.0;
    /// Arrow travel per tick; upgrades do not change it
    pub const ARROW_SPEED: f32 = 10.0;
    pub const ARROW_KILL_EXPERIENCE: u32 = 15;
    pub const ARROW_HALF_SIZE: f32 = 5.0;
    /// Arrows are dropped once they have traveled this far
    pub const ARROW_MAX_RANGE: f32 = 2000.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
