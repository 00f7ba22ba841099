//! Simulation state and run statistics
//!
//! [`GameState`] is everything the tick pipeline mutates. [`RunStats`] is
//! the scoreboard for one run and is kept separately so the Details screen
//! can outlive the simulation it summarizes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Orb};
use super::player::{Player, PlayerClass};
use super::spawn::{SpawnTimer, sample_spawn_point};
use crate::tuning::Tuning;

/// Per-run statistics shown on the Details screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Simulated seconds spent in the Running state
    pub elapsed_secs: f64,
    /// Experience collected from orbs and arrow kills
    pub xp_gained: u32,
    pub level_reached: u32,
    /// Enemies destroyed by contact or by arrows
    pub enemies_defeated: u32,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            level_reached: 1,
            ..Default::default()
        }
    }

    /// Whole seconds survived
    pub fn time_survived(&self) -> u64 {
        self.elapsed_secs.floor() as u64
    }
}

/// Complete simulation state (deterministic for a given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Screen size in pixels, used to center the camera
    pub screen_size: Vec2,
    pub player: Player,
    /// Active orbs (spawn order)
    pub orbs: Vec<Orb>,
    /// Active enemies (spawn order)
    pub enemies: Vec<Enemy>,
    /// World position of the screen's top-left corner
    pub camera: Vec2,
    pub orb_timer: SpawnTimer,
    pub enemy_timer: SpawnTimer,
    /// Level at which the last milestone health bonus was granted
    pub last_health_milestone: u32,
    /// Level at which enemies were last sped up
    pub last_scaling_level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Start a run. `class` of `None` gives a plain player with no attack.
    pub fn new(seed: u64, tuning: Tuning, screen_size: Vec2, class: Option<PlayerClass>) -> Self {
        let player = match class {
            Some(class) => class.spawn(Vec2::ZERO, &tuning),
            None => Player::new(Vec2::ZERO, &tuning),
        };
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            screen_size,
            player,
            orbs: Vec::new(),
            enemies: Vec::new(),
            camera: Vec2::ZERO,
            orb_timer: SpawnTimer::default(),
            enemy_timer: SpawnTimer::default(),
            last_health_milestone: 0,
            last_scaling_level: 0,
            time_ticks: 0,
            next_id: 1,
        };
        state.update_camera();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Center the camera on the player's box
    pub fn update_camera(&mut self) {
        let half_player = Vec2::splat(self.player.size / 2.0);
        self.camera = self.player.pos - self.screen_size / 2.0 + half_player;
    }

    /// Spawn one orb in the ring around the player
    pub fn spawn_orb(&mut self) {
        let pos = sample_spawn_point(&mut self.rng, self.player.pos, &self.tuning);
        let id = self.next_entity_id();
        let orb = Orb::new(id, pos, self.tuning.orb_radius, self.tuning.orb_experience);
        self.orbs.push(orb);
        log::debug!("Spawned orb {} at ({:.0}, {:.0})", id, pos.x, pos.y);
    }

    /// Spawn one enemy in the ring around the player, at the current
    /// level's base speed
    pub fn spawn_enemy(&mut self) {
        let pos = sample_spawn_point(&mut self.rng, self.player.pos, &self.tuning);
        let speed = self.tuning.enemy_speed_at(self.player.level);
        self.add_enemy(pos, speed);
    }

    /// Add an enemy at an exact position
    pub fn add_enemy(&mut self, pos: Vec2, speed: f32) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, pos, self.tuning.enemy_radius, speed));
        log::debug!("Spawned enemy {} at ({:.0}, {:.0})", id, pos.x, pos.y);
        id
    }

    /// Milestone checks, once per tick: every `scaling_level_step` levels the
    /// player gains max health and every live enemy speeds up
    pub fn apply_level_scaling(&mut self) {
        let step = self.tuning.scaling_level_step;
        let level = self.player.level;

        if level >= self.last_health_milestone + step {
            self.player
                .grant_milestone_health(self.tuning.milestone_health_bonus);
            self.last_health_milestone = level;
            log::info!(
                "Level {} milestone: max health now {}",
                level,
                self.player.max_health()
            );
        }

        if level >= self.last_scaling_level + step {
            self.last_scaling_level = level;
            let factor = self.tuning.scaling_factor;
            for enemy in &mut self.enemies {
                enemy.speed *= factor;
            }
            log::info!(
                "Level {} scaling: {} live enemies sped up x{}",
                level,
                self.enemies.len(),
                factor
            );
        }
    }
}
