//! Ranged attack capability (the Arcane Mage's arrows)
//!
//! Attached to a [`Player`](super::player::Player) as an optional component.
//! Arrows fly in a straight line toward where their target stood when fired.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bounds, Enemy};
use crate::tuning::Tuning;

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrow {
    pub pos: Vec2,
    /// Unit direction (zero if fired at an enemy standing on the player)
    pub dir: Vec2,
    /// Distance moved per tick
    pub speed: f32,
    /// Total distance moved so far
    pub traveled: f32,
}

impl Arrow {
    fn advance(&mut self) {
        self.pos += self.dir * self.speed;
        self.traveled += self.speed;
    }

    pub fn bounds(&self, half_size: f32) -> Bounds {
        Bounds::centered(self.pos, half_size)
    }
}

/// Cooldown-gated multi-target shooting
#[derive(Debug, Clone)]
pub struct RangedAttack {
    /// Seconds until the next volley is allowed
    cooldown: f32,
    cooldown_interval: f32,
    speed: f32,
    arrows: Vec<Arrow>,
    half_size: f32,
    max_range: f32,
}

impl RangedAttack {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            cooldown: 0.0,
            cooldown_interval: tuning.arrow_cooldown,
            speed: tuning.arrow_speed,
            arrows: Vec::new(),
            half_size: tuning.arrow_half_size,
            max_range: tuning.arrow_max_range,
        }
    }

    #[inline]
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    #[inline]
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.half_size
    }

    /// Fire at up to `count` nearest enemies. Returns the number of arrows
    /// fired; zero while on cooldown or with nothing to shoot at.
    pub fn shoot(&mut self, origin: Vec2, count: u32, enemies: &[Enemy]) -> usize {
        if self.cooldown > 0.0 || enemies.is_empty() || count == 0 {
            return 0;
        }

        let mut by_distance: Vec<(Vec2, f32)> = enemies
            .iter()
            .map(|e| (e.pos(), e.pos().distance(origin)))
            .collect();
        // Stable: equidistant enemies keep their spawn order
        by_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let fired = by_distance.len().min(count as usize);
        for &(target, _) in by_distance.iter().take(fired) {
            self.arrows.push(Arrow {
                pos: origin,
                dir: (target - origin).normalize_or_zero(),
                speed: self.speed,
                traveled: 0.0,
            });
        }

        self.cooldown = self.cooldown_interval;
        log::debug!("Fired {} arrow(s), {} in flight", fired, self.arrows.len());
        fired
    }

    /// Advance cooldown and arrows by one tick. Each arrow kills at most one
    /// enemy (the first it overlaps, in list order) and is consumed by it.
    /// Returns the number of enemies killed.
    pub fn update(&mut self, dt: f32, enemies: &mut Vec<Enemy>) -> u32 {
        if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
        }

        let half_size = self.half_size;
        let max_range = self.max_range;
        let mut kills = 0;

        self.arrows.retain_mut(|arrow| {
            arrow.advance();
            let hitbox = arrow.bounds(half_size);
            if let Some(idx) = enemies.iter().position(|e| hitbox.overlaps(&e.bounds())) {
                enemies.remove(idx);
                kills += 1;
                return false;
            }
            arrow.traveled <= max_range
        });

        kills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack() -> RangedAttack {
        RangedAttack::new(&Tuning::default())
    }

    fn enemy_at(id: u32, x: f32, y: f32) -> Enemy {
        Enemy::new(id, Vec2::new(x, y), 15.0, 2.0)
    }

    #[test]
    fn test_shoot_targets_nearest() {
        let mut ranged = attack();
        let enemies = vec![
            enemy_at(1, 300.0, 0.0),
            enemy_at(2, 0.0, 100.0),
            enemy_at(3, -500.0, 0.0),
            enemy_at(4, 0.0, -50.0),
            enemy_at(5, 200.0, 200.0),
        ];

        let fired = ranged.shoot(Vec2::ZERO, 2, &enemies);

        assert_eq!(fired, 2);
        assert_eq!(ranged.arrows().len(), 2);
        assert!((ranged.arrows()[0].dir - Vec2::new(0.0, -1.0)).length() < 1e-6);
        assert!((ranged.arrows()[1].dir - Vec2::new(0.0, 1.0)).length() < 1e-6);
        assert_eq!(ranged.cooldown(), 1.0);
    }

    #[test]
    fn test_shoot_noop_on_cooldown_or_empty() {
        let mut ranged = attack();
        assert_eq!(ranged.shoot(Vec2::ZERO, 1, &[]), 0);
        assert_eq!(ranged.cooldown(), 0.0);

        let enemies = vec![enemy_at(1, 100.0, 0.0)];
        assert_eq!(ranged.shoot(Vec2::ZERO, 1, &enemies), 1);
        assert_eq!(ranged.shoot(Vec2::ZERO, 1, &enemies), 0);
        assert_eq!(ranged.arrows().len(), 1);
    }

    #[test]
    fn test_more_arrows_than_enemies() {
        let mut ranged = attack();
        let enemies = vec![enemy_at(1, 100.0, 0.0)];
        assert_eq!(ranged.shoot(Vec2::ZERO, 3, &enemies), 1);
    }

    #[test]
    fn test_cooldown_expires_after_interval() {
        let mut ranged = attack();
        let mut enemies = vec![enemy_at(1, 5000.0, 0.0)];
        ranged.shoot(Vec2::ZERO, 1, &enemies);
        for _ in 0..59 {
            ranged.update(1.0 / 60.0, &mut enemies);
        }
        assert!(ranged.cooldown() > 0.0);
        ranged.update(1.0 / 60.0, &mut enemies);
        ranged.update(1.0 / 60.0, &mut enemies);
        assert_eq!(ranged.cooldown(), 0.0);
    }

    #[test]
    fn test_arrow_kills_one_enemy_and_is_consumed() {
        let mut ranged = attack();
        // Two enemies stacked on the same spot: only one dies
        let mut enemies = vec![enemy_at(1, 40.0, 0.0), enemy_at(2, 40.0, 0.0)];
        ranged.shoot(Vec2::ZERO, 1, &enemies);

        let mut kills = 0;
        for _ in 0..5 {
            kills += ranged.update(1.0 / 60.0, &mut enemies);
        }

        assert_eq!(kills, 1);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, 2);
        assert!(ranged.arrows().is_empty());
    }

    #[test]
    fn test_arrow_scans_past_non_colliding_enemies() {
        let mut ranged = attack();
        let mut enemies = vec![enemy_at(1, 0.0, 400.0), enemy_at(2, 25.0, 0.0)];
        ranged.shoot(Vec2::ZERO, 1, &enemies);

        let kills = ranged.update(1.0 / 60.0, &mut enemies);

        assert_eq!(kills, 1);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, 1);
    }

    #[test]
    fn test_missed_arrows_expire_at_max_range() {
        let mut ranged = attack();
        let mut enemies = vec![enemy_at(1, 100.0, 0.0)];
        ranged.shoot(Vec2::ZERO, 1, &enemies);
        // Target moves out of the line of fire
        enemies[0].set_pos(Vec2::new(100.0, 500.0));

        for _ in 0..200 {
            ranged.update(1.0 / 60.0, &mut enemies);
        }
        assert_eq!(ranged.arrows().len(), 1);
        ranged.update(1.0 / 60.0, &mut enemies);
        assert!(ranged.arrows().is_empty());
        assert_eq!(enemies.len(), 1);
    }
}
