//! The player-controlled flyer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Number of frames in the wing flap animation
pub const WING_FRAMES: u8 = 3;

/// The falling entity the player keeps airborne
///
/// `pos.x` is fixed at construction; only `pos.y` and `velocity` change.
/// There is no terminal velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Vertical velocity (pixels/tick, positive = down)
    pub velocity: f32,
    gravity: f32,
    jump_impulse: f32,
}

impl Flyer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.flyer_start(),
            size: config.flyer_size(),
            velocity: 0.0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
        }
    }

    #[inline]
    pub fn apply_gravity(&mut self) {
        self.velocity += self.gravity;
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos.y += self.velocity;
    }

    /// Replace the current velocity with the jump impulse
    #[inline]
    pub fn jump(&mut self) {
        self.velocity = self.jump_impulse;
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Wing animation frame for renderers; steps every second tick
    pub fn wing_frame(time_ticks: u64) -> u8 {
        ((time_ticks / 2) % WING_FRAMES as u64) as u8
    }
}
