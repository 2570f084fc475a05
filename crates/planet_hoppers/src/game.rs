//! Game host
//!
//! Owns the simulation session, the saved progress, and the cosmetic layer,
//! and turns gameplay events into level flow: win events advance and persist
//! progress, a loss rebuilds the current level.

use crate::background::Background;
use crate::levels::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::progress::LevelStore;
use orbit_engine::config::Config;
use orbit_engine::prelude::*;
use orbit_engine::render;
use thiserror::Error;

/// Game-level errors
#[derive(Error, Debug)]
pub enum GameError {
    /// The simulation session failed
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// A level definition failed to build
    #[error("level error: {0}")]
    Level(#[from] UniverseError),

    /// Configuration could not be validated
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// The running game
pub struct Game {
    engine: Engine,
    background: Background,
    store: LevelStore,
    store_path: String,
}

impl Game {
    /// Start the game at the saved level
    pub fn new(
        config: SimulationConfig,
        store: LevelStore,
        store_path: impl Into<String>,
    ) -> Result<Self, GameError> {
        let mut rng = rand::thread_rng();
        let universe = levels::level(store.level, &mut rng)?;
        let engine = Engine::new(universe, config)?;
        let background = Background::new(SCREEN_WIDTH, SCREEN_HEIGHT, &mut rng);
        Ok(Self {
            engine,
            background,
            store,
            store_path: store_path.into(),
        })
    }

    /// Advance the game to the host's frame timestamp
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Result<(), GameError> {
        self.background.update(timestamp_ms);
        let events = self.engine.on_frame(timestamp_ms)?;

        for event in events {
            match event {
                GameEvent::PointsCollected { points, total } => {
                    log::info!("collected {points}, score {total}");
                }
                GameEvent::GoalReached | GameEvent::TargetPointsReached => {
                    self.store.advance();
                    self.persist_progress();
                    self.load_level()?;
                    break;
                }
                GameEvent::PlayerLost => {
                    log::info!("level {} failed, restarting", self.store.level);
                    self.load_level()?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Draw the whole frame into a sink
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        self.background.draw(sink);
        render::draw(self.engine.universe(), sink);
        if self.engine.is_paused() {
            sink.fill_text(
                vec(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
                "Paused",
                48.0,
            );
        }
    }

    /// Forward a jump press to the simulation
    pub fn on_jump_down(&mut self) {
        self.engine.on_jump_input_down();
    }

    /// Forward a jump release to the simulation
    pub fn on_jump_up(&mut self) {
        self.engine.on_jump_input_up();
    }

    /// Toggle the pause state
    pub fn toggle_pause(&mut self) {
        if self.engine.is_paused() {
            self.engine.resume();
        } else {
            self.engine.pause();
        }
    }

    /// Wipe progress and restart from the first level
    pub fn reset_progress(&mut self) -> Result<(), GameError> {
        self.store.reset();
        self.persist_progress();
        self.load_level()
    }

    /// The level the player is currently on
    pub fn current_level(&self) -> usize {
        self.store.level
    }

    /// The simulation session, for inspection
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    fn load_level(&mut self) -> Result<(), GameError> {
        let universe = levels::level(self.store.level, &mut rand::thread_rng())?;
        log::info!("loading level {}", self.store.level);
        self.engine.replace_universe(universe);
        Ok(())
    }

    /// Progress persistence is best-effort; losing a save never kills a run
    fn persist_progress(&self) {
        if let Err(err) = self.store.save_to_file(&self.store_path) {
            log::warn!("could not save progress to {}: {err}", self.store_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_engine::render::RecordingSink;

    fn temp_store_path(tag: &str) -> String {
        std::env::temp_dir()
            .join(format!("planet_hoppers_{tag}.toml"))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn a_frame_draws_stars_and_bodies() {
        let path = temp_store_path("draw");
        let mut game = Game::new(SimulationConfig::default(), LevelStore::default(), &path)
            .expect("level 0 builds");
        game.on_frame(0.0).unwrap();
        game.on_frame(16.0).unwrap();

        let mut sink = RecordingSink::new();
        game.draw(&mut sink);
        // 100 stars plus the three bodies of the first level (goal draws twice)
        assert_eq!(sink.circle_count(), 104);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn pause_overlay_text_appears_only_while_paused() {
        let path = temp_store_path("pause");
        let mut game = Game::new(SimulationConfig::default(), LevelStore::default(), &path)
            .expect("level 0 builds");

        let text_count = |game: &Game| {
            let mut sink = RecordingSink::new();
            game.draw(&mut sink);
            sink.commands
                .iter()
                .filter(|c| matches!(c, orbit_engine::render::DrawCommand::Text { .. }))
                .count()
        };

        assert_eq!(text_count(&game), 0);
        game.toggle_pause();
        assert_eq!(text_count(&game), 1);
        game.toggle_pause();
        assert_eq!(text_count(&game), 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn reset_returns_to_the_first_level() {
        let path = temp_store_path("reset");
        let store = LevelStore { level: 3 };
        let mut game =
            Game::new(SimulationConfig::default(), store, &path).expect("level 3 builds");
        assert_eq!(game.current_level(), 3);

        game.reset_progress().unwrap();
        assert_eq!(game.current_level(), 0);
        std::fs::remove_file(&path).ok();
    }
}
