//! Flap Sim - a side-scrolling gap-dodging arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, game over)
//! - `config`: Data-driven game tuning
//! - `clock`: Fixed-step driver for the outer loop
//! - `error`: Configuration errors
//!
//! Rendering, audio and input polling belong to the embedding application;
//! it feeds [`sim::TickInput`] in and reads [`sim::Snapshot`] out.

pub mod clock;
pub mod config;
pub mod error;
pub mod sim;

pub use clock::FixedStep;
pub use config::GameConfig;
pub use error::ConfigError;

/// Loop constants
pub mod consts {
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the accumulator (seconds)
    pub const MAX_FRAME_SECONDS: f32 = 0.25;
}
