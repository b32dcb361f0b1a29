//! Read-only world view handed to renderers
//!
//! A snapshot is an owned copy; once captured it never changes, so a
//! presentation layer can hold it across frames or hand it to another thread.

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::rng::GapSource;
use super::state::{CrashCause, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
    /// Wing animation frame (0..WING_FRAMES)
    pub wing_frame: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub gap_offset: i32,
    pub upper_band_bottom: f32,
    pub lower_band_top: f32,
    pub scored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub screen_width: f32,
    pub screen_height: f32,
    pub flyer: FlyerView,
    /// Left to right
    pub obstacles: Vec<ObstacleView>,
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub ground_y: f32,
    pub score: u64,
    pub running: bool,
    pub crash: Option<CrashCause>,
}

impl Snapshot {
    pub fn capture<G: GapSource>(state: &GameState<G>) -> Self {
        let flyer = &state.flyer;
        Self {
            time_ticks: state.time_ticks,
            screen_width: state.config.screen_width,
            screen_height: state.config.screen_height,
            flyer: FlyerView {
                x: flyer.x(),
                y: flyer.y(),
                width: flyer.width(),
                height: flyer.height(),
                velocity: flyer.velocity,
                wing_frame: Flyer::wing_frame(state.time_ticks),
            },
            obstacles: state
                .spawner
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    gap_offset: o.gap_offset,
                    upper_band_bottom: o.upper_band_bottom(),
                    lower_band_top: o.lower_band_top(&state.config),
                    scored: o.scored,
                })
                .collect(),
            obstacle_width: state.config.obstacle_width,
            gap_height: state.config.gap_height,
            ground_y: state.ground.y,
            score: state.score,
            running: state.is_running(),
            crash: state.crash,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
