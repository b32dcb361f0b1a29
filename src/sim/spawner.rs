//! Obstacle spawning and lifecycle

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::obstacle::Obstacle;
use super::rng::GapSource;
use crate::config::GameConfig;

/// Owns the spawn countdown and the live obstacles
///
/// `obstacles` is kept in spawn order, which is also left-to-right order on
/// screen since every obstacle moves at the same speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks until the next spawn
    pub countdown: u32,
    pub obstacles: Vec<Obstacle>,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            countdown: config.spawn_interval,
            obstacles: Vec::new(),
        }
    }

    /// Count down one tick; spawn a single obstacle when the countdown
    /// expires. Returns the new obstacle's gap offset if one was spawned.
    pub fn tick(&mut self, config: &GameConfig, gaps: &mut impl GapSource) -> Option<i32> {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return None;
        }

        let gap_offset = gaps.next_gap_offset(config.gap_offset_min, config.gap_offset_max);
        self.obstacles.push(Obstacle::new(config, gap_offset));
        self.countdown = config.spawn_interval;
        log::debug!(
            "Spawned obstacle #{} (gap offset {gap_offset})",
            self.obstacles.len()
        );
        Some(gap_offset)
    }

    pub fn advance_all(&mut self, config: &GameConfig) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(config);
        }
    }

    /// Drop every obstacle that has left the screen, keeping order.
    /// Returns how many were removed.
    pub fn prune_offscreen(&mut self, config: &GameConfig) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen(config));
        let removed = before - self.obstacles.len();
        if removed > 0 {
            log::debug!("Pruned {removed} off-screen obstacle(s)");
        }
        removed
    }

    /// Number of obstacles the flyer passed for the first time this tick
    pub fn score_all(&mut self, config: &GameConfig, flyer: &Flyer) -> u32 {
        self.obstacles
            .iter_mut()
            .map(|o| o.check_scored(config, flyer.x()))
            .filter(|&scored| scored)
            .count() as u32
    }

    pub fn any_colliding(&self, config: &GameConfig, flyer: &Flyer) -> bool {
        self.obstacles.iter().any(|o| o.is_colliding(config, flyer))
    }
}
