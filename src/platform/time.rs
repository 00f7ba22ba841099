//! Frame timing

use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Fixed-step accumulator. Real frame time goes in, a whole number of
/// simulation steps comes out.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's elapsed time and return how many fixed steps to run.
    /// At most `MAX_SUBSTEPS` per frame; any backlog beyond that is dropped
    /// so a long stall doesn't cause a spiral.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Wall-clock timer for the HUD. Cosmetic only; run statistics use
/// simulated time.
#[derive(Debug, Clone, Copy)]
pub struct RunTimer {
    started: Instant,
}

impl RunTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn restart(&mut self) {
        self.started = Instant::now();
    }
}

impl Default for RunTimer {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frame_one_step() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(SIM_DT * 1.01), 1);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(SIM_DT * 0.6), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
        assert_eq!(clock.advance(SIM_DT * 0.6), 0);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(5.0), MAX_SUBSTEPS);
        // Backlog dropped
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(SIM_DT * 1.01), 1);
    }

    #[test]
    fn test_run_timer_monotonic() {
        let timer = RunTimer::start();
        let a = timer.elapsed();
        let b = timer.elapsed();
        assert!(b >= a);
    }
}
