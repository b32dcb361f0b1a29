//! Obstacle pairs scrolling in from the right
//!
//! An obstacle is two vertical bands with a gap between them. The upper band
//! covers everything at or above `gap_offset`, the lower band everything at
//! or below `gap_offset + gap_height`. Speed, width and gap height are shared
//! by every obstacle and read from the [`GameConfig`].

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom edge of the upper band; fixed for the obstacle's lifetime
    pub gap_offset: i32,
    /// Set permanently once the flyer has passed
    pub scored: bool,
}

impl Obstacle {
    /// New obstacle at the right edge of the screen
    pub fn new(config: &GameConfig, gap_offset: i32) -> Self {
        Self {
            x: config.screen_width,
            gap_offset,
            scored: false,
        }
    }

    #[inline]
    pub fn advance(&mut self, config: &GameConfig) {
        self.x -= config.obstacle_speed;
    }

    #[inline]
    pub fn is_off_screen(&self, config: &GameConfig) -> bool {
        self.x < config.offscreen_threshold
    }

    /// Right edge
    #[inline]
    pub fn trailing_edge(&self, config: &GameConfig) -> f32 {
        self.x + config.obstacle_width
    }

    #[inline]
    pub fn upper_band_bottom(&self) -> f32 {
        self.gap_offset as f32
    }

    #[inline]
    pub fn lower_band_top(&self, config: &GameConfig) -> f32 {
        self.gap_offset as f32 + config.gap_height
    }

    /// Returns true exactly once: the first call after `flyer_x` has moved
    /// past the trailing edge.
    pub fn check_scored(&mut self, config: &GameConfig, flyer_x: f32) -> bool {
        if !self.scored && flyer_x > self.trailing_edge(config) {
            self.scored = true;
            return true;
        }
        false
    }

    /// Horizontal overlap plus either the flyer's top in the upper band or
    /// its bottom in the lower band.
    ///
    /// Top and bottom are tested independently against their own band.
    pub fn is_colliding(&self, config: &GameConfig, flyer: &Flyer) -> bool {
        let overlaps_x =
            flyer.x() + flyer.width() >= self.x && flyer.x() <= self.trailing_edge(config);
        overlaps_x
            && (flyer.y() <= self.upper_band_bottom()
                || flyer.bottom() >= self.lower_band_top(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flyer_at(config: &GameConfig, y: f32) -> Flyer {
        let mut flyer = Flyer::new(config);
        flyer.pos.y = y;
        flyer
    }

    #[test]
    fn test_spawns_at_right_edge() {
        let config = GameConfig::default();
        let obstacle = Obstacle::new(&config, 80);
        assert_eq!(obstacle.x, 400.0);
        assert_eq!(obstacle.gap_offset, 80);
        assert!(!obstacle.scored);
        assert_eq!(obstacle.upper_band_bottom(), 80.0);
        assert_eq!(obstacle.lower_band_top(&config), 210.0);
    }

    #[test]
    fn test_geometry_follows_config() {
        let config = GameConfig {
            obstacle_speed: 2.0,
            obstacle_width: 10.0,
            gap_height: 60.0,
            offscreen_threshold: 0.0,
            screen_width: 4.0,
            ..Default::default()
        };
        let mut obstacle = Obstacle::new(&config, 30);
        assert_eq!(obstacle.trailing_edge(&config), 14.0);
        assert_eq!(obstacle.lower_band_top(&config), 90.0);

        obstacle.advance(&config);
        obstacle.advance(&config);
        assert_eq!(obstacle.x, 0.0);
        assert!(!obstacle.is_off_screen(&config));
        obstacle.advance(&config);
        assert!(obstacle.is_off_screen(&config));
    }

    #[test]
    fn test_gap_collision_scenario() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(&config, 50);
        // Line the obstacle up with the flyer
        obstacle.x = config.flyer_x;

        assert!(!obstacle.is_colliding(&config, &flyer_at(&config, 100.0)));
        assert!(obstacle.is_colliding(&config, &flyer_at(&config, 0.0)));
        // Bottom edge reaching the lower band
        assert!(obstacle.is_colliding(&config, &flyer_at(&config, 180.0 - 24.0)));
        assert!(!obstacle.is_colliding(&config, &flyer_at(&config, 180.0 - 24.0 - 0.5)));
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(&config, 50);
        let flyer = flyer_at(&config, 0.0);

        // Leading edge of flyer exactly touches the obstacle
        obstacle.x = flyer.x() + flyer.width();
        assert!(obstacle.is_colliding(&config, &flyer));
        obstacle.x += 0.1;
        assert!(!obstacle.is_colliding(&config, &flyer));

        // Trailing edge of obstacle exactly at the flyer
        obstacle.x = flyer.x() - config.obstacle_width;
        assert!(obstacle.is_colliding(&config, &flyer));
        obstacle.x -= 0.1;
        assert!(!obstacle.is_colliding(&config, &flyer));
    }

    #[test]
    fn test_check_scored_is_one_shot() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(&config, 100);
        let flyer_x = config.flyer_x;

        let mut hits = 0;
        while !obstacle.is_off_screen(&config) {
            if obstacle.check_scored(&config, flyer_x) {
                hits += 1;
                assert!(flyer_x > obstacle.trailing_edge(&config));
            }
            obstacle.advance(&config);
        }
        assert_eq!(hits, 1);
        assert!(obstacle.scored);
        assert!(!obstacle.check_scored(&config, flyer_x));
    }

    #[test]
    fn test_not_scored_at_exact_trailing_edge() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(&config, 100);
        obstacle.x = config.flyer_x - config.obstacle_width;
        assert!(!obstacle.check_scored(&config, config.flyer_x));
        obstacle.advance(&config);
        assert!(obstacle.check_scored(&config, config.flyer_x));
    }

    #[test]
    fn test_off_screen_threshold_is_strict() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(&config, 0);
        for _ in 0..90 {
            obstacle.advance(&config);
        }
        assert_eq!(obstacle.x, -50.0);
        assert!(!obstacle.is_off_screen(&config));
        obstacle.advance(&config);
        assert!(obstacle.is_off_screen(&config));
    }
}
