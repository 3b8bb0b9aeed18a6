use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::grid::GridSize;

/// Default number of grid rows.
pub const DEFAULT_ROWS: u16 = 20;

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: u16 = 20;

/// Length of the snake placed at construction.
pub const INITIAL_SNAKE_LENGTH: i32 = 3;

/// Smallest column count that still fits the starting snake (columns 1..=3).
pub const MIN_COLUMNS: u16 = 4;

/// Settings for one simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: u16,
    pub columns: u16,
    /// Fixed seed for food placement; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize {
            rows: self.rows,
            columns: self.columns,
        }
    }
}

/// Loads a config from a JSON file.
///
/// Returns the default config when the file does not exist. Returns `Err`
/// when the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<GameConfig, GameError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(GameConfig::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}
