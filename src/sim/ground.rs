//! Static ground boundary

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    /// Top edge of the ground
    pub y: f32,
}

impl Ground {
    pub fn new(config: &GameConfig) -> Self {
        Self { y: config.ground_y() }
    }

    /// True once the flyer's bottom edge sinks below the ground line
    #[inline]
    pub fn is_colliding(&self, flyer: &Flyer) -> bool {
        flyer.bottom() > self.y
    }
}
