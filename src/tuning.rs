//! Data-driven game balance
//!
//! Every gameplay constant in [`crate::consts`] has a field here; only the
//! timestep constants are fixed at compile time. A tuning file only needs
//! the keys it overrides; everything else falls back to the compile-time
//! default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::read_json_or_default;

/// Runtime-tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_size: f32,
    pub player_base_speed: f32,
    pub player_base_health: u32,
    pub player_max_stamina: f32,
    pub base_experience_to_level: u32,
    pub experience_growth: f32,

    // === Sprint ===
    pub sprint_duration: f32,
    pub sprint_cooldown: f32,
    pub sprint_speed_multiplier: f32,

    // === Orbs ===
    pub orb_radius: f32,
    pub orb_experience: u32,
    pub orb_spawn_interval: f32,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_base_speed: f32,
    pub enemy_spawn_interval: f32,
    pub enemy_contact_damage: u32,

    // === Spawn ring ===
    pub spawn_min_distance: f32,
    pub spawn_max_distance: f32,
    pub spawn_jitter: i32,

    // === Level scaling ===
    pub scaling_level_step: u32,
    pub scaling_factor: f32,
    pub milestone_health_bonus: u32,

    // === Arrows ===
    pub arrow_cooldown: f32,
    pub arrow_speed: f32,
    pub arrow_kill_experience: u32,
    pub arrow_half_size: f32,
    pub arrow_max_range: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_base_speed: PLAYER_BASE_SPEED,
            player_base_health: PLAYER_BASE_HEALTH,
            player_max_stamina: PLAYER_MAX_STAMINA,
            base_experience_to_level: BASE_EXPERIENCE_TO_LEVEL,
            experience_growth: EXPERIENCE_GROWTH,

            sprint_duration: SPRINT_DURATION,
            sprint_cooldown: SPRINT_COOLDOWN,
            sprint_speed_multiplier: SPRINT_SPEED_MULTIPLIER,

            orb_radius: ORB_RADIUS,
            orb_experience: ORB_EXPERIENCE,
            orb_spawn_interval: ORB_SPAWN_INTERVAL,

            enemy_radius: ENEMY_RADIUS,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_spawn_interval: ENEMY_SPAWN_INTERVAL,
            enemy_contact_damage: ENEMY_CONTACT_DAMAGE,

            spawn_min_distance: SPAWN_MIN_DISTANCE,
            spawn_max_distance: SPAWN_MAX_DISTANCE,
            spawn_jitter: SPAWN_JITTER,

            scaling_level_step: SCALING_LEVEL_STEP,
            scaling_factor: SCALING_FACTOR,
            milestone_health_bonus: MILESTONE_HEALTH_BONUS,

            arrow_cooldown: ARROW_COOLDOWN,
            arrow_speed: ARROW_SPEED,
            arrow_kill_experience: ARROW_KILL_EXPERIENCE,
            arrow_half_size: ARROW_HALF_SIZE,
            arrow_max_range: ARROW_MAX_RANGE,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let tuning: Self = read_json_or_default(path)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive",
                })
            }
        }

        positive("player_size", self.player_size)?;
        positive("player_base_speed", self.player_base_speed)?;
        positive("player_max_stamina", self.player_max_stamina)?;
        positive("sprint_duration", self.sprint_duration)?;
        positive("sprint_cooldown", self.sprint_cooldown)?;
        positive("sprint_speed_multiplier", self.sprint_speed_multiplier)?;
        positive("orb_radius", self.orb_radius)?;
        positive("orb_spawn_interval", self.orb_spawn_interval)?;
        positive("enemy_radius", self.enemy_radius)?;
        positive("enemy_spawn_interval", self.enemy_spawn_interval)?;
        positive("arrow_speed", self.arrow_speed)?;
        positive("arrow_half_size", self.arrow_half_size)?;
        positive("arrow_max_range", self.arrow_max_range)?;

        if self.player_base_health == 0 {
            return Err(ConfigError::Invalid {
                field: "player_base_health",
                reason: "must be at least 1",
            });
        }
        if self.base_experience_to_level == 0 {
            return Err(ConfigError::Invalid {
                field: "base_experience_to_level",
                reason: "must be at least 1",
            });
        }
        if self.experience_growth < 1.0 {
            return Err(ConfigError::Invalid {
                field: "experience_growth",
                reason: "must be at least 1.0",
            });
        }
        if self.spawn_min_distance < 0.0 || self.spawn_min_distance > self.spawn_max_distance {
            return Err(ConfigError::Invalid {
                field: "spawn_min_distance",
                reason: "must be non-negative and not exceed spawn_max_distance",
            });
        }
        if self.spawn_jitter < 0 {
            return Err(ConfigError::Invalid {
                field: "spawn_jitter",
                reason: "must not be negative",
            });
        }
        if self.scaling_level_step == 0 {
            return Err(ConfigError::Invalid {
                field: "scaling_level_step",
                reason: "must be at least 1",
            });
        }
        if self.scaling_factor < 1.0 {
            return Err(ConfigError::Invalid {
                field: "scaling_factor",
                reason: "must be at least 1.0",
            });
        }
        if self.arrow_cooldown < 0.0 {
            return Err(ConfigError::Invalid {
                field: "arrow_cooldown",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    /// Difficulty tier: how many scaling steps the given level has passed
    pub fn difficulty_tier(&self, level: u32) -> i32 {
        (level / self.scaling_level_step) as i32
    }

    /// Enemy spawn interval at the given player level (shrinks geometrically)
    pub fn enemy_spawn_interval_at(&self, level: u32) -> f32 {
        self.enemy_spawn_interval / self.scaling_factor.powi(self.difficulty_tier(level))
    }

    /// Base speed of an enemy spawned at the given player level
    pub fn enemy_speed_at(&self, level: u32) -> f32 {
        self.enemy_base_speed * self.scaling_factor.powi(self.difficulty_tier(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let tuning = Tuning::from_json(r#"{ "orb_experience": 25, "enemy_base_speed": 3.0 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.orb_experience, 25);
        assert_eq!(tuning.enemy_base_speed, 3.0);
        assert_eq!(tuning.enemy_radius, ENEMY_RADIUS);
    }

    #[test]
    fn test_rejects_inverted_spawn_ring() {
        let err = Tuning::from_json(r#"{ "spawn_min_distance": 900.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spawn_min_distance",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = Tuning::from_json(r#"{ "orb_spawn_interval": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_player_and_sprint_overrides() {
        let tuning = Tuning::from_json(
            r#"{ "player_size": 24.0, "experience_growth": 2.0, "sprint_cooldown": 12.0 }"#,
        )
        .expect("valid tuning");
        assert_eq!(tuning.player_size, 24.0);
        assert_eq!(tuning.experience_growth, 2.0);
        assert_eq!(tuning.sprint_cooldown, 12.0);
        assert_eq!(tuning.arrow_speed, ARROW_SPEED);
    }

    #[test]
    fn test_rejects_shrinking_threshold() {
        let err = Tuning::from_json(r#"{ "experience_growth": 0.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "experience_growth",
                ..
            }
        ));
    }

    #[test]
    fn test_level_scaling_curves() {
        let tuning = Tuning::default();
        assert_eq!(tuning.enemy_spawn_interval_at(1), 1.5);
        assert_eq!(tuning.enemy_spawn_interval_at(4), 1.5);
        assert!((tuning.enemy_spawn_interval_at(5) - 1.0).abs() < 1e-6);
        assert!((tuning.enemy_speed_at(10) - 4.5).abs() < 1e-5);
    }
}
