//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. The order
//! inside [`tick`] is part of the game rules and must not be rearranged.

use super::rng::GapSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap (space/click/tap)
    pub jump: bool,
    /// Leave the game; handled by the outer loop, never by `tick`
    pub quit: bool,
}

impl TickInput {
    pub const IDLE: Self = Self {
        jump: false,
        quit: false,
    };
    pub const JUMP: Self = Self {
        jump: true,
        quit: false,
    };
}

/// Advance the game state by one fixed tick
///
/// A finished episode is left untouched.
pub fn tick<G: GapSource>(state: &mut GameState<G>, input: &TickInput) {
    if state.phase == GamePhase::Over {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    // 1. Spawn
    if let Some(gap_offset) = state.spawner.tick(&state.config, &mut state.gaps) {
        state.events.push(GameEvent::Spawned { gap_offset });
    }

    // 2. Flyer physics; a jump replaces this tick's gravity
    if input.jump {
        state.flyer.jump();
        state.events.push(GameEvent::Flapped);
    } else {
        state.flyer.apply_gravity();
    }
    state.flyer.advance();

    // 3. Obstacles: move, cull, score
    state.spawner.advance_all(&state.config);
    state.spawner.prune_offscreen(&state.config);
    let passed = state.spawner.score_all(&state.config, &state.flyer);
    if passed > 0 {
        state.score += u64::from(passed);
        log::info!("Score: {}", state.score);
        state.events.push(GameEvent::Scored { score: state.score });
    }

    // 4. Termination
    if let Some(cause) = state.crash_cause() {
        state.phase = GamePhase::Over;
        state.crash = Some(cause);
        state.events.push(GameEvent::Crashed { cause });
        log::info!(
            "Game over after {} ticks: {cause:?}, score {}",
            state.time_ticks,
            state.score
        );
    }
}
