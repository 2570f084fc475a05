//! Planet Hoppers
//!
//! Headless demo driver for the gravity-hopping arcade game: loads saved
//! progress and the simulation config, then runs a scripted session that
//! charges a jump, releases it, and reports what happened. A windowed host
//! would drive [`Game`] the same way from its input and frame callbacks.

use orbit_engine::config::Config;
use orbit_engine::foundation::logging;
use orbit_engine::prelude::*;

mod background;
mod game;
mod levels;
mod progress;

use game::Game;
use progress::LevelStore;

const CONFIG_PATH: &str = "planet_hoppers.toml";
const PROGRESS_PATH: &str = "planet_hoppers_progress.toml";
const FRAME_MS: f64 = 16.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match SimulationConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => {
            log::info!("loaded tunables from {CONFIG_PATH}");
            config
        }
        Err(err) => {
            log::info!("using default tunables ({err})");
            SimulationConfig::default()
        }
    };
    let store = LevelStore::load_or_default(PROGRESS_PATH);
    let mut game = Game::new(config, store, PROGRESS_PATH)?;
    log::info!("starting on level {}", game.current_level());

    // scripted session: one full-charge jump, then twenty seconds of flight
    let mut wall_clock = Timer::new();
    let mut timestamp = 0.0;
    let mut frame = |game: &mut Game, frames: u32| -> Result<(), game::GameError> {
        for _ in 0..frames {
            timestamp += FRAME_MS;
            game.on_frame(timestamp)?;
        }
        Ok(())
    };

    frame(&mut game, 2)?;
    game.on_jump_down();
    frame(&mut game, 32)?;
    game.on_jump_up();
    frame(&mut game, 1250)?;
    wall_clock.update();

    let mut sink = RecordingSink::new();
    game.draw(&mut sink);
    log::info!(
        "simulated {:.1}s in {:.0}ms of wall time; ended on level {} with {} points, {} draw commands",
        timestamp / 1000.0,
        wall_clock.total_ms(),
        game.current_level(),
        game.engine().universe().points,
        sink.commands.len()
    );
    Ok(())
}
