//! Flap Sim headless runner
//!
//! Drives the simulation with a simple autopilot standing in for the
//! player, logging events as they happen. Useful for smoke-testing tuning
//! files without a renderer.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use flap_sim::sim::{GameEvent, GameState, TickInput, tick};
use flap_sim::{FixedStep, GameConfig};

#[derive(Debug, Parser)]
#[command(name = "flap-sim", about = "Run a headless episode with an autopilot")]
struct Args {
    /// JSON tuning file (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Gap offset seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Stop after this many ticks even if still alive
    #[arg(long, default_value_t = 3000)]
    max_ticks: u64,
    /// Pace ticks at the configured tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Flap whenever the flyer sinks below the middle of the next gap
fn autopilot(state: &GameState) -> TickInput {
    let flyer = &state.flyer;
    let target = state
        .spawner
        .obstacles
        .iter()
        .find(|o| o.trailing_edge(&state.config) >= flyer.x())
        .map(|o| (o.upper_band_bottom() + o.lower_band_top(&state.config)) / 2.0)
        .unwrap_or(state.config.screen_height / 2.0);

    let center = flyer.y() + flyer.height() / 2.0;
    TickInput {
        jump: center > target && flyer.velocity >= 0.0,
        quit: false,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    log::info!("Flap Sim (headless) starting, seed {}", args.seed);

    let mut state = GameState::new(config, args.seed).context("invalid game config")?;
    let mut clock = FixedStep::new(state.config.tick_rate);
    let mut last = Instant::now();

    'run: while state.is_running() && state.time_ticks < args.max_ticks {
        let steps = if args.realtime {
            std::thread::sleep(Duration::from_secs_f32(clock.dt() / 2.0));
            let now = Instant::now();
            let steps = clock.advance((now - last).as_secs_f32());
            last = now;
            steps
        } else {
            1
        };

        for _ in 0..steps {
            let input = autopilot(&state);
            tick(&mut state, &input);
            for event in &state.events {
                match event {
                    GameEvent::Spawned { gap_offset } => {
                        log::debug!("tick {}: obstacle, gap at {gap_offset}", state.time_ticks)
                    }
                    GameEvent::Scored { score } => println!("{score}"),
                    GameEvent::Crashed { cause } => {
                        log::info!("tick {}: crashed into {cause:?}", state.time_ticks)
                    }
                    GameEvent::Flapped => log::trace!("tick {}: flap", state.time_ticks),
                }
            }
            if !state.is_running() || state.time_ticks >= args.max_ticks {
                break 'run;
            }
        }
    }

    log::info!(
        "Finished after {} ticks with score {}",
        state.time_ticks,
        state.score
    );

    if args.json {
        let json = state
            .snapshot()
            .to_json()
            .context("serializing final snapshot")?;
        println!("{json}");
    }
    Ok(())
}
