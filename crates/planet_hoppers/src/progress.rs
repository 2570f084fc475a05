//! Saved progress
//!
//! The only thing persisted between sessions is the current level index,
//! stored as a TOML file next to the executable.

use crate::levels::LEVEL_COUNT;
use orbit_engine::config::Config;
use serde::{Deserialize, Serialize};

/// Persisted level progress
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelStore {
    /// Index of the level the player is on
    pub level: usize,
}

impl Config for LevelStore {}

impl LevelStore {
    /// Load saved progress, starting fresh if the file is missing or corrupt
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(store) => {
                log::info!("resuming at level {}", store.level);
                store
            }
            Err(err) => {
                log::info!("no saved progress ({err}), starting at level 0");
                Self::default()
            }
        }
    }

    /// Move on to the next level, clamped at the end screen
    pub fn advance(&mut self) {
        if self.level < LEVEL_COUNT {
            self.level += 1;
        }
    }

    /// Wipe progress back to the first level
    pub fn reset(&mut self) {
        self.level = 0;
    }
}
