//! Random sources for gap offsets
//!
//! The spawner never calls a global RNG. It asks a [`GapSource`], which is
//! either the seeded PCG stream used in real runs or a scripted sequence for
//! tests that need exact obstacle geometry.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplies gap offsets for newly spawned obstacles
pub trait GapSource {
    /// Next offset in the inclusive range `[min, max]`
    fn next_gap_offset(&mut self, min: i32, max: i32) -> i32;
}

/// Seeded PCG stream; the same seed always yields the same obstacles
#[derive(Debug, Clone)]
pub struct PcgGaps {
    seed: u64,
    rng: Pcg32,
}

impl PcgGaps {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl GapSource for PcgGaps {
    fn next_gap_offset(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of offsets, cycling when exhausted
///
/// Values are clamped into the requested range so a script can never
/// produce geometry the live game could not.
#[derive(Debug, Clone)]
pub struct ScriptedGaps {
    offsets: VecDeque<i32>,
}

impl ScriptedGaps {
    pub fn new(offsets: impl IntoIterator<Item = i32>) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }

    /// Always the same offset
    pub fn constant(offset: i32) -> Self {
        Self::new([offset])
    }
}

impl GapSource for ScriptedGaps {
    fn next_gap_offset(&mut self, min: i32, max: i32) -> i32 {
        match self.offsets.pop_front() {
            Some(offset) => {
                self.offsets.push_back(offset);
                offset.clamp(min, max)
            }
            None => min,
        }
    }
}
