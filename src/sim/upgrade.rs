//! Level-up upgrades
//!
//! Each upgrade has a capped level. Effects are a pure function of
//! `(kind, level)` so the same level always yields the same stat value, no
//! matter how many times it is applied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerStats;

/// Max health gained per level of the health upgrade
pub const HEALTH_PER_LEVEL: u32 = 20;
/// Sprint cooldown never drops below this many seconds
pub const MIN_SPRINT_COOLDOWN: f32 = 5.0;

/// The fixed set of upgrades offered on level-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    ArrowCount,
    ArrowSpeed,
    ArrowDamage,
    #[serde(rename = "health")]
    MaxHealth,
    SprintDuration,
    SprintCooldown,
    SprintSpeed,
}

impl UpgradeKind {
    /// Table order, which is also the order choices are offered in
    pub const ALL: [UpgradeKind; 7] = [
        UpgradeKind::ArrowCount,
        UpgradeKind::ArrowSpeed,
        UpgradeKind::ArrowDamage,
        UpgradeKind::MaxHealth,
        UpgradeKind::SprintDuration,
        UpgradeKind::SprintCooldown,
        UpgradeKind::SprintSpeed,
    ];

    pub fn key(self) -> &'static str {
        match self {
            UpgradeKind::ArrowCount => "arrow_count",
            UpgradeKind::ArrowSpeed => "arrow_speed",
            UpgradeKind::ArrowDamage => "arrow_damage",
            UpgradeKind::MaxHealth => "health",
            UpgradeKind::SprintDuration => "sprint_duration",
            UpgradeKind::SprintCooldown => "sprint_cooldown",
            UpgradeKind::SprintSpeed => "sprint_speed",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UpgradeKind::ArrowCount => "Arrow Count",
            UpgradeKind::ArrowSpeed => "Arrow Speed",
            UpgradeKind::ArrowDamage => "Arrow Damage",
            UpgradeKind::MaxHealth => "Max Health",
            UpgradeKind::SprintDuration => "Sprint Duration",
            UpgradeKind::SprintCooldown => "Sprint Cooldown",
            UpgradeKind::SprintSpeed => "Sprint Speed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            UpgradeKind::ArrowCount => "Shoot multiple arrows at once",
            UpgradeKind::ArrowSpeed => "Increase arrow travel speed",
            UpgradeKind::ArrowDamage => "Increase arrow damage",
            UpgradeKind::MaxHealth => "Increase maximum health",
            UpgradeKind::SprintDuration => "Increase sprint duration",
            UpgradeKind::SprintCooldown => "Decrease sprint cooldown",
            UpgradeKind::SprintSpeed => "Increase sprint speed multiplier",
        }
    }

    pub fn max_level(self) -> u8 {
        match self {
            UpgradeKind::ArrowCount => 3,
            UpgradeKind::ArrowSpeed => 5,
            UpgradeKind::ArrowDamage => 5,
            UpgradeKind::MaxHealth => 5,
            UpgradeKind::SprintDuration => 3,
            UpgradeKind::SprintCooldown => 3,
            UpgradeKind::SprintSpeed => 3,
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UpgradeKind {
    type Err = UpgradeError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        UpgradeKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| UpgradeError::Unknown(key.to_string()))
    }
}

/// Why an upgrade was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("unknown upgrade `{0}`")]
    Unknown(String),
    #[error("{kind} is already at max level {max_level}")]
    AtCap { kind: UpgradeKind, max_level: u8 },
}

/// Absolute stat value produced by an upgrade at a given level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatEffect {
    ArrowCount(u32),
    ArrowSpeed(f32),
    ArrowDamage(u32),
    /// Max health added on top of the base value (also refills health)
    MaxHealthBonus(u32),
    SprintDuration(f32),
    SprintCooldown(f32),
    SprintSpeedMultiplier(f32),
}

impl StatEffect {
    /// Text shown on an upgrade button
    pub fn describe(&self) -> String {
        match self {
            StatEffect::ArrowCount(n) => format!("Current: {} arrows", n),
            StatEffect::ArrowSpeed(s) => format!("Current: {} speed", s),
            StatEffect::ArrowDamage(d) => format!("Current: {} damage", d),
            StatEffect::MaxHealthBonus(b) => format!("Current: +{} max health", b),
            StatEffect::SprintDuration(s) => format!("Current: {:.1}s duration", s),
            StatEffect::SprintCooldown(s) => format!("Current: {:.1}s cooldown", s),
            StatEffect::SprintSpeedMultiplier(m) => format!("Current: {:.1}x speed", m),
        }
    }
}

/// Stat value of `kind` at `level`, on top of the unupgraded `base` stats
pub fn effect(kind: UpgradeKind, level: u8, base: &PlayerStats) -> StatEffect {
    let l = level as f32;
    match kind {
        UpgradeKind::ArrowCount => StatEffect::ArrowCount(base.arrow_count + level as u32),
        UpgradeKind::ArrowSpeed => StatEffect::ArrowSpeed(base.arrow_speed + l * 2.0),
        UpgradeKind::ArrowDamage => StatEffect::ArrowDamage(base.arrow_damage + level as u32),
        UpgradeKind::MaxHealth => StatEffect::MaxHealthBonus(level as u32 * HEALTH_PER_LEVEL),
        UpgradeKind::SprintDuration => StatEffect::SprintDuration(base.sprint_duration + l * 2.0),
        UpgradeKind::SprintCooldown => StatEffect::SprintCooldown(
            (base.sprint_cooldown - l * 5.0).max(MIN_SPRINT_COOLDOWN),
        ),
        UpgradeKind::SprintSpeed => {
            StatEffect::SprintSpeedMultiplier(base.sprint_speed_multiplier + l * 0.5)
        }
    }
}

/// One upgrade's progress. The level can only move up, and never past the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeSlot {
    kind: UpgradeKind,
    level: u8,
}

impl UpgradeSlot {
    fn new(kind: UpgradeKind) -> Self {
        Self { kind, level: 0 }
    }

    #[inline]
    pub fn kind(&self) -> UpgradeKind {
        self.kind
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn max_level(&self) -> u8 {
        self.kind.max_level()
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= self.kind.max_level()
    }

    /// Effect at the current level
    pub fn effect(&self, base: &PlayerStats) -> StatEffect {
        effect(self.kind, self.level, base)
    }

    /// "Name (Level c/m)"
    pub fn title(&self) -> String {
        format!("{} (Level {}/{})", self.kind.name(), self.level, self.max_level())
    }
}

/// Per-player upgrade progress, one slot per [`UpgradeKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeTable {
    slots: [UpgradeSlot; 7],
}

impl Default for UpgradeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl UpgradeTable {
    pub fn new() -> Self {
        Self {
            slots: UpgradeKind::ALL.map(UpgradeSlot::new),
        }
    }

    pub fn slot(&self, kind: UpgradeKind) -> &UpgradeSlot {
        // ALL and slots share the same order
        &self.slots[kind as usize]
    }

    pub fn level(&self, kind: UpgradeKind) -> u8 {
        self.slot(kind).level
    }

    /// Raise `kind` by one level, returning the new level
    pub fn advance(&mut self, kind: UpgradeKind) -> Result<u8, UpgradeError> {
        let slot = &mut self.slots[kind as usize];
        if slot.is_maxed() {
            return Err(UpgradeError::AtCap {
                kind,
                max_level: kind.max_level(),
            });
        }
        slot.level += 1;
        Ok(slot.level)
    }

    /// Slots still below their cap, in table order
    pub fn available(&self) -> impl Iterator<Item = &UpgradeSlot> {
        self.slots.iter().filter(|slot| !slot.is_maxed())
    }
}
