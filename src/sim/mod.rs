//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded gap source only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod flyer;
pub mod ground;
pub mod obstacle;
pub mod rng;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use flyer::{Flyer, WING_FRAMES};
pub use ground::Ground;
pub use obstacle::Obstacle;
pub use rng::{GapSource, PcgGaps, ScriptedGaps};
pub use snapshot::{FlyerView, ObstacleView, Snapshot};
pub use spawner::Spawner;
pub use state::{CrashCause, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
