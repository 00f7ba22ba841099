//! World entities: orbs, enemies, and their collision boxes
//!
//! Positions are world space. Every entity keeps an axis-aligned box that is
//! recomputed whenever its position changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box of side `2 * half` centered on `center`
    pub fn centered(center: Vec2, half: f32) -> Self {
        Self {
            min: center - Vec2::splat(half),
            size: Vec2::splat(half * 2.0),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

/// An experience pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orb {
    pub id: u32,
    pos: Vec2,
    pub radius: f32,
    pub experience: u32,
    bounds: Bounds,
}

impl Orb {
    pub fn new(id: u32, pos: Vec2, radius: f32, experience: u32) -> Self {
        Self {
            id,
            pos,
            radius,
            experience,
            bounds: Bounds::centered(pos, radius),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A hostile entity that homes toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pos: Vec2,
    pub radius: f32,
    /// Distance moved per tick
    pub speed: f32,
    bounds: Bounds,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            id,
            pos,
            radius,
            speed,
            bounds: Bounds::centered(pos, radius),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Teleport the enemy, keeping its box in sync
    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
        self.bounds = Bounds::centered(pos, self.radius);
    }

    /// Step `speed` units toward `target`; no movement when already on it
    pub fn update(&mut self, target: Vec2) {
        let delta = target - self.pos;
        let dist = delta.length();
        if dist > 0.0 {
            let dir = delta / dist;
            self.set_pos(self.pos + dir * self.speed);
        }
    }

    /// Push two overlapping enemies apart, each by half the overlap
    pub fn separate(&mut self, other: &mut Enemy) {
        let delta = self.pos - other.pos;
        let dist = delta.length();
        let min_dist = self.radius + other.radius;
        if dist < min_dist && dist > 0.0 {
            let push = (min_dist - dist) / 2.0;
            let dir = delta / dist;
            self.set_pos(self.pos + dir * push);
            other.set_pos(other.pos - dir * push);
        }
    }
}

/// Resolve every pair once, in ascending `(i, j)` order with `i < j`
pub fn separate_all(enemies: &mut [Enemy]) {
    for i in 0..enemies.len() {
        let (head, tail) = enemies.split_at_mut(i + 1);
        let current = &mut head[i];
        for other in tail.iter_mut() {
            current.separate(other);
        }
    }
}
