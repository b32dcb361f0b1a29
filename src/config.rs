//! Game tuning
//!
//! Every physics and layout constant lives here instead of in free-floating
//! module constants. A `GameConfig` is immutable once handed to
//! [`GameState::new`](crate::sim::GameState::new), which rejects anything
//! that fails [`GameConfig::validate`].

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable simulation constants
///
/// Units are pixels and ticks. Partial JSON files override only the fields
/// they name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground strip at the bottom of the screen
    pub ground_height: f32,
    /// Fixed tick rate of the outer loop (ticks per second)
    pub tick_rate: u32,

    // === Flyer ===
    /// Horizontal position of the flyer (never changes)
    pub flyer_x: f32,
    pub flyer_width: f32,
    pub flyer_height: f32,
    /// Added to velocity every tick (pixels/tick²)
    pub gravity: f32,
    /// Velocity set by a jump (negative = up)
    pub jump_impulse: f32,

    // === Obstacles ===
    /// Leftward speed of every obstacle (pixels/tick)
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    /// Vertical opening between the upper and lower bands
    ///
    /// The upper band ends at `gap_offset` and the lower band starts at
    /// `gap_offset + gap_height`. The default of 130 is the opening left by
    /// the stock 320px pipe sprites drawn at `gap_offset - 200` and
    /// `gap_offset + 250`; renderers should draw bands from these two edges
    /// rather than from sprite offsets.
    pub gap_height: f32,
    /// Inclusive range for the random gap offset
    pub gap_offset_min: i32,
    pub gap_offset_max: i32,
    /// Ticks between spawns
    pub spawn_interval: u32,
    /// Obstacles with x strictly below this are removed
    pub offscreen_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 400.0,
            screen_height: 600.0,
            ground_height: 100.0,
            tick_rate: 30,

            flyer_x: 50.0,
            flyer_width: 34.0,
            flyer_height: 24.0,
            gravity: 0.5,
            jump_impulse: -5.0,

            obstacle_speed: 5.0,
            obstacle_width: 52.0,
            gap_height: 130.0,
            gap_offset_min: 0,
            gap_offset_max: 200,
            spawn_interval: 50,
            offscreen_threshold: -50.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to defaults if it is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.as_ref().display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Reject configurations the simulation cannot run sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("flyer_width", self.flyer_width),
            ("flyer_height", self.flyer_height),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("flyer_x", self.flyer_x),
            ("offscreen_threshold", self.offscreen_threshold),
            ("ground_height", self.ground_height),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }

        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(ConfigError::invalid(
                "jump_impulse",
                format!("must be negative, got {}", self.jump_impulse),
            ));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::invalid("tick_rate", "must be > 0"));
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::invalid("spawn_interval", "must be > 0"));
        }
        if self.gap_offset_min > self.gap_offset_max {
            return Err(ConfigError::invalid(
                "gap_offset_min",
                format!(
                    "range [{}, {}] is inverted",
                    self.gap_offset_min, self.gap_offset_max
                ),
            ));
        }
        if self.ground_height < 0.0 || self.ground_height >= self.screen_height {
            return Err(ConfigError::invalid(
                "ground_height",
                format!("must lie within [0, {})", self.screen_height),
            ));
        }
        Ok(())
    }

    /// Top edge of the ground
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Where the flyer starts each run
    #[inline]
    pub fn flyer_start(&self) -> Vec2 {
        Vec2::new(self.flyer_x, (self.screen_height / 2.0).floor())
    }

    #[inline]
    pub fn flyer_size(&self) -> Vec2 {
        Vec2::new(self.flyer_width, self.flyer_height)
    }

    /// Seconds per tick
    #[inline]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}
