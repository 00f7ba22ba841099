//! The player: movement, sprint/stamina, experience and upgrades
//!
//! Classes are built by composition. A plain [`Player`] has no attack; the
//! Arcane Mage is a player with a [`RangedAttack`] attached.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combat::RangedAttack;
use super::entity::{Bounds, Enemy};
use super::tick::TickInput;
use super::upgrade::{StatEffect, UpgradeError, UpgradeKind, UpgradeSlot, UpgradeTable, effect};
use crate::tuning::Tuning;

/// Selectable character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerClass {
    ArcaneMage,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 1] = [PlayerClass::ArcaneMage];

    pub fn name(self) -> &'static str {
        match self {
            PlayerClass::ArcaneMage => "Arcane Mage",
        }
    }

    /// Build a fresh player of this class
    pub fn spawn(self, pos: Vec2, tuning: &Tuning) -> Player {
        match self {
            PlayerClass::ArcaneMage => Player::new(pos, tuning).with_ranged_attack(tuning),
        }
    }
}

/// Sprint state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SprintState {
    /// Walking or idle; sprint may start once stamina is full
    Ready,
    /// Boosted speed, stamina draining
    Sprinting { remaining: f32 },
    /// Base speed, stamina regenerating
    CoolingDown { remaining: f32 },
}

/// Stats driven by upgrades
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub arrow_count: u32,
    /// Shown on the level-up screen only; arrows always fly at the tuned speed
    pub arrow_speed: f32,
    /// Shown on the level-up screen only; every hit kills
    pub arrow_damage: u32,
    pub sprint_duration: f32,
    pub sprint_cooldown: f32,
    pub sprint_speed_multiplier: f32,
}

impl PlayerStats {
    /// Unupgraded stats
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            arrow_count: 1,
            arrow_speed: tuning.arrow_speed,
            arrow_damage: 1,
            sprint_duration: tuning.sprint_duration,
            sprint_cooldown: tuning.sprint_cooldown,
            sprint_speed_multiplier: tuning.sprint_speed_multiplier,
        }
    }
}

/// The controlled character
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the player's box, world space
    pub pos: Vec2,
    pub size: f32,
    pub base_speed: f32,
    pub level: u32,
    pub stats: PlayerStats,
    base_stats: PlayerStats,
    /// Present for classes with a ranged attack
    pub ranged: Option<RangedAttack>,

    health: u32,
    max_health: u32,
    base_max_health: u32,
    upgrade_health_bonus: u32,
    milestone_health_bonus: u32,

    experience: u32,
    experience_to_level: u32,
    experience_growth: f32,

    stamina: f32,
    max_stamina: f32,
    sprint: SprintState,

    upgrades: UpgradeTable,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        let stats = PlayerStats::new(tuning);
        Self {
            pos,
            size: tuning.player_size,
            base_speed: tuning.player_base_speed,
            level: 1,
            stats,
            base_stats: stats,
            ranged: None,

            health: tuning.player_base_health,
            max_health: tuning.player_base_health,
            base_max_health: tuning.player_base_health,
            upgrade_health_bonus: 0,
            milestone_health_bonus: 0,

            experience: 0,
            experience_to_level: tuning.base_experience_to_level,
            experience_growth: tuning.experience_growth,

            stamina: tuning.player_max_stamina,
            max_stamina: tuning.player_max_stamina,
            sprint: SprintState::Ready,

            upgrades: UpgradeTable::new(),
        }
    }

    pub fn with_ranged_attack(mut self, tuning: &Tuning) -> Self {
        self.ranged = Some(RangedAttack::new(tuning));
        self
    }

    // === Accessors ===

    #[inline]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[inline]
    pub fn experience(&self) -> u32 {
        self.experience
    }

    #[inline]
    pub fn experience_to_level(&self) -> u32 {
        self.experience_to_level
    }

    #[inline]
    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    #[inline]
    pub fn max_stamina(&self) -> f32 {
        self.max_stamina
    }

    #[inline]
    pub fn sprint_state(&self) -> SprintState {
        self.sprint
    }

    pub fn is_sprinting(&self) -> bool {
        matches!(self.sprint, SprintState::Sprinting { .. })
    }

    /// Current movement speed per tick
    pub fn speed(&self) -> f32 {
        if self.is_sprinting() {
            self.base_speed * self.stats.sprint_speed_multiplier
        } else {
            self.base_speed
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, Vec2::splat(self.size))
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    // === Movement ===

    /// Advance the sprint state machine by `dt`, then move axis-by-axis.
    /// Diagonals are not normalized.
    pub fn move_with(&mut self, input: &TickInput, dt: f32) {
        if input.sprint && self.sprint == SprintState::Ready && self.stamina >= self.max_stamina {
            self.sprint = SprintState::Sprinting {
                remaining: self.stats.sprint_duration,
            };
        }

        if let SprintState::Sprinting { remaining } = self.sprint {
            let drain = self.max_stamina / self.stats.sprint_duration;
            self.set_stamina(self.stamina - drain * dt);
            let remaining = remaining - dt;
            self.sprint = if remaining <= 0.0 {
                SprintState::CoolingDown {
                    remaining: self.stats.sprint_cooldown,
                }
            } else {
                SprintState::Sprinting { remaining }
            };
        }

        if let SprintState::CoolingDown { remaining } = self.sprint {
            let regen = self.max_stamina / self.stats.sprint_cooldown;
            self.set_stamina(self.stamina + regen * dt);
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.sprint = SprintState::Ready;
                self.stamina = self.max_stamina;
            } else {
                self.sprint = SprintState::CoolingDown { remaining };
            }
        }

        let speed = self.speed();
        if input.up {
            self.pos.y -= speed;
        }
        if input.down {
            self.pos.y += speed;
        }
        if input.left {
            self.pos.x -= speed;
        }
        if input.right {
            self.pos.x += speed;
        }
    }

    fn set_stamina(&mut self, value: f32) {
        self.stamina = value.clamp(0.0, self.max_stamina);
    }

    // === Health ===

    /// Subtract damage, stopping at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Level milestone reward: raises max health and heals by the same amount
    pub fn grant_milestone_health(&mut self, bonus: u32) {
        self.milestone_health_bonus += bonus;
        self.recompute_max_health();
        self.heal(bonus);
    }

    fn recompute_max_health(&mut self) {
        self.max_health =
            self.base_max_health + self.upgrade_health_bonus + self.milestone_health_bonus;
        self.health = self.health.min(self.max_health);
    }

    // === Experience ===

    /// Accumulate experience. Never levels up by itself.
    pub fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    pub fn can_level_up(&self) -> bool {
        self.experience >= self.experience_to_level
    }

    /// Spend one threshold's worth of experience; the remainder carries over
    pub fn level_up(&mut self) {
        self.level += 1;
        self.experience = self.experience.saturating_sub(self.experience_to_level);
        self.experience_to_level =
            (self.experience_to_level as f64 * self.experience_growth as f64).floor() as u32;
    }

    // === Upgrades ===

    pub fn upgrades(&self) -> &UpgradeTable {
        &self.upgrades
    }

    /// What `kind` currently contributes, for the upgrade buttons
    pub fn upgrade_effect(&self, kind: UpgradeKind) -> StatEffect {
        self.upgrades.slot(kind).effect(&self.base_stats)
    }

    /// Upgrades below their cap, in table order
    pub fn available_upgrades(&self) -> Vec<UpgradeSlot> {
        self.upgrades.available().copied().collect()
    }

    /// Apply an upgrade by key. `false` for unknown keys or capped upgrades,
    /// in which case nothing changes.
    pub fn apply_upgrade(&mut self, key: &str) -> bool {
        match key.parse().and_then(|kind| self.upgrade(kind)) {
            Ok(_) => true,
            Err(err) => {
                log::debug!("Upgrade rejected: {}", err);
                false
            }
        }
    }

    /// Raise `kind` by one level and apply its effect
    pub fn upgrade(&mut self, kind: UpgradeKind) -> Result<u8, UpgradeError> {
        let level = self.upgrades.advance(kind)?;
        self.apply_effect(effect(kind, level, &self.base_stats));
        log::debug!("Upgraded {} to level {}", kind, level);
        Ok(level)
    }

    fn apply_effect(&mut self, effect: StatEffect) {
        match effect {
            StatEffect::ArrowCount(n) => self.stats.arrow_count = n,
            StatEffect::ArrowSpeed(s) => self.stats.arrow_speed = s,
            StatEffect::ArrowDamage(d) => self.stats.arrow_damage = d,
            StatEffect::MaxHealthBonus(bonus) => {
                self.upgrade_health_bonus = bonus;
                self.recompute_max_health();
                self.health = self.max_health;
            }
            StatEffect::SprintDuration(s) => self.stats.sprint_duration = s,
            StatEffect::SprintCooldown(s) => self.stats.sprint_cooldown = s,
            StatEffect::SprintSpeedMultiplier(m) => self.stats.sprint_speed_multiplier = m,
        }
    }

    // === Combat ===

    pub fn has_ranged_attack(&self) -> bool {
        self.ranged.is_some()
    }

    /// Fire a volley if this player has a ranged attack and it is ready
    pub fn shoot_arrow(&mut self, enemies: &[Enemy]) -> usize {
        match self.ranged.as_mut() {
            Some(ranged) => ranged.shoot(self.pos, self.stats.arrow_count, enemies),
            None => 0,
        }
    }

    /// Advance arrows; every kill grants `kill_experience`. Returns kills.
    pub fn update_ranged(
        &mut self,
        dt: f32,
        enemies: &mut Vec<Enemy>,
        kill_experience: u32,
    ) -> u32 {
        let kills = match self.ranged.as_mut() {
            Some(ranged) => ranged.update(dt, enemies),
            None => return 0,
        };
        self.gain_experience(kills * kill_experience);
        kills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn player() -> Player {
        Player::new(Vec2::ZERO, &Tuning::default())
    }

    fn sprint_input() -> TickInput {
        TickInput {
            sprint: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_level_up_carries_over() {
        let mut p = player();
        p.gain_experience(120);
        assert!(p.can_level_up());
        p.level_up();
        assert_eq!(p.level, 2);
        assert_eq!(p.experience(), 20);
        assert_eq!(p.experience_to_level(), 150);
        p.gain_experience(300);
        p.level_up();
        assert_eq!(p.experience(), 170);
        assert_eq!(p.experience_to_level(), 225);
        p.level_up();
        assert_eq!(p.experience_to_level(), 337);
    }

    #[test]
    fn test_tuned_growth_and_size() {
        let tuning = Tuning {
            experience_growth: 2.0,
            player_size: 20.0,
            ..Tuning::default()
        };
        let mut p = Player::new(Vec2::ZERO, &tuning);
        assert_eq!(p.bounds().size, Vec2::splat(20.0));
        p.gain_experience(100);
        p.level_up();
        assert_eq!(p.experience_to_level(), 200);
    }

    #[test]
    fn test_gain_experience_does_not_level() {
        let mut p = player();
        p.gain_experience(500);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn test_apply_upgrade_cap() {
        let mut p = player();
        assert!(p.apply_upgrade("arrow_count"));
        assert!(p.apply_upgrade("arrow_count"));
        assert!(p.apply_upgrade("arrow_count"));
        assert_eq!(p.stats.arrow_count, 4);

        let before = p.stats;
        assert!(!p.apply_upgrade("arrow_count"));
        assert_eq!(p.stats, before);
        assert_eq!(p.upgrades().level(UpgradeKind::ArrowCount), 3);
    }

    #[test]
    fn test_apply_unknown_upgrade() {
        let mut p = player();
        let before = p.stats;
        assert!(!p.apply_upgrade("teleport"));
        assert_eq!(p.stats, before);
    }

    #[test]
    fn test_available_upgrades_excludes_capped() {
        let mut p = player();
        assert_eq!(p.available_upgrades().len(), 7);
        for _ in 0..3 {
            p.upgrade(UpgradeKind::SprintSpeed).unwrap();
        }
        let available = p.available_upgrades();
        assert_eq!(available.len(), 6);
        assert!(available.iter().all(|s| s.kind() != UpgradeKind::SprintSpeed));
    }

    #[test]
    fn test_health_upgrade_refills() {
        let mut p = player();
        p.take_damage(60);
        assert!(p.apply_upgrade("health"));
        assert_eq!(p.max_health(), 120);
        assert_eq!(p.health(), 120);
    }

    #[test]
    fn test_milestone_health_stacks_with_upgrade() {
        let mut p = player();
        p.take_damage(50);
        p.grant_milestone_health(20);
        assert_eq!(p.max_health(), 120);
        assert_eq!(p.health(), 70);
        p.upgrade(UpgradeKind::MaxHealth).unwrap();
        assert_eq!(p.max_health(), 140);
        assert_eq!(p.health(), 140);
    }

    #[test]
    fn test_damage_saturates() {
        let mut p = player();
        p.take_damage(250);
        assert_eq!(p.health(), 0);
        assert!(p.is_dead());
    }

    #[test]
    fn test_axis_movement_unnormalized() {
        let mut p = player();
        let input = TickInput {
            up: true,
            right: true,
            ..Default::default()
        };
        p.move_with(&input, SIM_DT);
        assert_eq!(p.pos, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_sprint_cycle() {
        let mut p = player();
        p.move_with(&sprint_input(), SIM_DT);
        assert!(p.is_sprinting());
        assert_eq!(p.speed(), 10.0);
        assert!(p.stamina() < p.max_stamina());

        // 5 s sprint at 60 Hz, then into cooldown
        for _ in 0..300 {
            p.move_with(&TickInput::default(), SIM_DT);
        }
        assert!(matches!(p.sprint_state(), SprintState::CoolingDown { .. }));
        assert_eq!(p.speed(), 5.0);
        let drained = p.stamina();
        assert!(drained < 1.0);

        // Holding sprint during cooldown does nothing
        p.move_with(&sprint_input(), SIM_DT);
        assert!(!p.is_sprinting());
        assert!(p.stamina() > drained);

        for _ in 0..1200 {
            p.move_with(&TickInput::default(), SIM_DT);
        }
        assert_eq!(p.sprint_state(), SprintState::Ready);
        assert_eq!(p.stamina(), p.max_stamina());
    }

    #[test]
    fn test_sprint_moves_faster() {
        let mut p = player();
        let input = TickInput {
            sprint: true,
            right: true,
            ..Default::default()
        };
        p.move_with(&input, SIM_DT);
        assert_eq!(p.pos.x, 10.0);
    }

    #[test]
    fn test_arrow_speed_upgrade_keeps_flight_speed() {
        let tuning = Tuning::default();
        let mut p = PlayerClass::ArcaneMage.spawn(Vec2::ZERO, &tuning);
        p.upgrade(UpgradeKind::ArrowSpeed).unwrap();
        assert_eq!(p.stats.arrow_speed, 12.0);
        assert_eq!(
            p.upgrade_effect(UpgradeKind::ArrowSpeed).describe(),
            "Current: 12 speed"
        );

        let mut enemies = vec![Enemy::new(1, Vec2::new(500.0, 0.0), 15.0, 2.0)];
        assert_eq!(p.shoot_arrow(&enemies), 1);
        p.update_ranged(SIM_DT, &mut enemies, tuning.arrow_kill_experience);
        let arrow = &p.ranged.as_ref().unwrap().arrows()[0];
        assert_eq!(arrow.pos.x, 10.0);
    }

    #[test]
    fn test_base_player_cannot_shoot() {
        let mut p = player();
        let mut enemies = vec![Enemy::new(1, Vec2::new(50.0, 0.0), 15.0, 2.0)];
        assert_eq!(p.shoot_arrow(&enemies), 0);
        assert_eq!(p.update_ranged(SIM_DT, &mut enemies, 15), 0);
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_arcane_mage_kill_grants_experience() {
        let tuning = Tuning::default();
        let mut p = PlayerClass::ArcaneMage.spawn(Vec2::ZERO, &tuning);
        let mut enemies = vec![Enemy::new(1, Vec2::new(20.0, 0.0), 15.0, 2.0)];
        assert_eq!(p.shoot_arrow(&enemies), 1);
        let kills = p.update_ranged(SIM_DT, &mut enemies, tuning.arrow_kill_experience);
        assert_eq!(kills, 1);
        assert_eq!(p.experience(), 15);
        assert!(enemies.is_empty());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn arb_input() -> impl Strategy<Value = TickInput> {
            (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(sprint, up, left)| TickInput {
                sprint,
                up,
                left,
                ..Default::default()
            })
        }

        proptest! {
            #[test]
            fn stamina_stays_in_range(
                inputs in proptest::collection::vec(arb_input(), 1..2000),
                upgrades in proptest::collection::vec(0usize..7, 0..10),
            ) {
                let mut p = player();
                for pick in upgrades {
                    let _ = p.upgrade(UpgradeKind::ALL[pick]);
                }
                for input in &inputs {
                    p.move_with(input, SIM_DT);
                    prop_assert!(p.stamina() >= 0.0);
                    prop_assert!(p.stamina() <= p.max_stamina());
                }
            }

            #[test]
            fn health_never_exceeds_max(
                hits in proptest::collection::vec(0u32..40, 0..20),
                milestones in 0u32..4,
            ) {
                let mut p = player();
                for _ in 0..milestones {
                    p.grant_milestone_health(20);
                }
                for hit in hits {
                    p.take_damage(hit);
                    p.heal(hit / 2);
                    prop_assert!(p.health() <= p.max_health());
                }
            }
        }
    }
}
