//! Fixed-step accumulator for the outer game loop
//!
//! Turns variable real frame times into a whole number of simulation ticks.

use crate::consts::{MAX_FRAME_SECONDS, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    /// Longest frame fed to the accumulator; always room for a full
    /// `MAX_SUBSTEPS` burst
    max_frame: f32,
    accumulator: f32,
}

impl FixedStep {
    /// `tick_rate` is in ticks per second and must be non-zero
    pub fn new(tick_rate: u32) -> Self {
        let dt = 1.0 / tick_rate.max(1) as f32;
        Self {
            dt,
            max_frame: MAX_FRAME_SECONDS.max((MAX_SUBSTEPS + 1) as f32 * dt),
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Add elapsed wall time and return how many ticks to run now
    ///
    /// Long stalls are clamped, and at most `MAX_SUBSTEPS` ticks are
    /// returned; leftover time carries into the next frame.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, self.max_frame);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps += 1;
        }
        steps
    }

    /// Fraction of a tick left in the accumulator (for interpolation)
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.dt).clamp(0.0, 1.0)
    }
}
