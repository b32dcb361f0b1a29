//! Game state and core simulation types
//!
//! Everything one episode needs lives in [`GameState`]; restarting means
//! building a fresh one.

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::ground::Ground;
use super::rng::{GapSource, PcgGaps};
use super::snapshot::Snapshot;
use super::spawner::Spawner;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Episode ended; terminal
    Over,
}

/// What ended the episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Flew off the top of the screen
    Ceiling,
    Ground,
    Obstacle,
}

/// Things that happened during the last tick, for audio/HUD layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Flapped,
    Spawned { gap_offset: i32 },
    Scored { score: u64 },
    Crashed { cause: CrashCause },
}

/// Complete state of one episode
#[derive(Debug, Clone)]
pub struct GameState<G: GapSource = PcgGaps> {
    pub config: GameConfig,
    pub flyer: Flyer,
    pub ground: Ground,
    pub spawner: Spawner,
    /// Obstacles passed; never decreases
    pub score: u64,
    pub phase: GamePhase,
    /// Set together with `GamePhase::Over`
    pub crash: Option<CrashCause>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted by the most recent running tick
    pub events: Vec<GameEvent>,
    pub(crate) gaps: G,
}

impl GameState<PcgGaps> {
    /// New episode with gap offsets drawn from a seeded PCG stream
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_gap_source(config, PcgGaps::new(seed))
    }

    /// Throw the episode away and start over with the same config
    pub fn restart(&mut self, seed: u64) {
        log::info!("Restarting with seed {seed}");
        // Already validated when this state was built
        *self = Self::build(self.config.clone(), PcgGaps::new(seed));
    }

    pub fn seed(&self) -> u64 {
        self.gaps.seed()
    }
}

impl<G: GapSource> GameState<G> {
    /// New episode drawing gap offsets from `gaps`
    ///
    /// Fails if `config` does not pass [`GameConfig::validate`].
    pub fn with_gap_source(config: GameConfig, gaps: G) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, gaps))
    }

    fn build(config: GameConfig, gaps: G) -> Self {
        Self {
            flyer: Flyer::new(&config),
            ground: Ground::new(&config),
            spawner: Spawner::new(&config),
            config,
            score: 0,
            phase: GamePhase::Running,
            crash: None,
            time_ticks: 0,
            events: Vec::new(),
            gaps,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// First termination condition that currently holds, if any
    pub fn crash_cause(&self) -> Option<CrashCause> {
        if self.flyer.y() < 0.0 {
            Some(CrashCause::Ceiling)
        } else if self.ground.is_colliding(&self.flyer) {
            Some(CrashCause::Ground)
        } else if self.spawner.any_colliding(&self.config, &self.flyer) {
            Some(CrashCause::Obstacle)
        } else {
            None
        }
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::rng::ScriptedGaps;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), 1).expect("valid config");
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.spawner.countdown, 50);
        assert!(state.spawner.obstacles.is_empty());
        assert_eq!(state.crash_cause(), None);
        assert_eq!(state.seed(), 1);
    }

    #[test]
    fn test_crash_causes() {
        let mut state = GameState::with_gap_source(GameConfig::default(), ScriptedGaps::constant(0))
            .expect("valid config");

        state.flyer.pos.y = -0.1;
        assert_eq!(state.crash_cause(), Some(CrashCause::Ceiling));
        state.flyer.pos.y = 0.0;
        assert_ne!(state.crash_cause(), Some(CrashCause::Ceiling));

        state.flyer.pos.y = 480.0;
        assert_eq!(state.crash_cause(), Some(CrashCause::Ground));

        state.flyer.pos.y = 300.0;
        let mut obstacle = Obstacle::new(&state.config, 100);
        obstacle.x = state.flyer.x();
        state.spawner.obstacles.push(obstacle);
        assert_eq!(state.crash_cause(), Some(CrashCause::Obstacle));

        state.flyer.pos.y = 120.0;
        assert_eq!(state.crash_cause(), None);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(GameConfig::default(), 5).expect("valid config");
        state.score = 7;
        state.phase = GamePhase::Over;
        state.crash = Some(CrashCause::Ground);
        state.flyer.pos.y = 10.0;

        state.restart(6);
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.crash, None);
        assert_eq!(state.flyer.y(), 300.0);
        assert_eq!(state.seed(), 6);
    }

    #[test]
    fn test_rejects_inverted_gap_range() {
        let config = GameConfig {
            gap_offset_min: 10,
            gap_offset_max: 5,
            spawn_interval: 1,
            ..Default::default()
        };
        let err = GameState::new(config.clone(), 1).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "gap_offset_min", .. }));

        let err = GameState::with_gap_source(config, ScriptedGaps::constant(7)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "gap_offset_min", .. }));
    }

    #[test]
    fn test_rejects_zero_spawn_interval() {
        let config = GameConfig {
            spawn_interval: 0,
            ..Default::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }
}
