//! Spawn timers and spawn-point sampling

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Accumulates tick time and fires once per interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    elapsed: f32,
}

impl SpawnTimer {
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Add `dt`; returns true (and restarts from zero) once `interval` is reached
    pub fn advance(&mut self, dt: f32, interval: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

/// Random point in the spawn ring around `center`: uniform angle, uniform
/// distance in `[min, max]`, plus whole-unit jitter on each axis
pub fn sample_spawn_point<R: Rng>(rng: &mut R, center: Vec2, tuning: &Tuning) -> Vec2 {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let dist = rng.random_range(tuning.spawn_min_distance..=tuning.spawn_max_distance);
    let jitter = Vec2::new(
        rng.random_range(-tuning.spawn_jitter..=tuning.spawn_jitter) as f32,
        rng.random_range(-tuning.spawn_jitter..=tuning.spawn_jitter) as f32,
    );
    center + polar_to_cartesian(dist, angle) + jitter
}
