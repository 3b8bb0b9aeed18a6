use std::io;

use thiserror::Error;

use crate::snake::Position;

/// Errors raised while building a game or loading its configuration.
///
/// A running `GameState` never fails: collisions are reported through
/// `TickOutcome::GameOver`, not through this type.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("grid of {rows}x{columns} is too small for the snake")]
    GridTooSmall { rows: u16, columns: u16 },

    #[error("snake layout must contain at least one segment")]
    EmptySnake,

    #[error("snake segment {0:?} lies outside the grid")]
    SegmentOutOfBounds(Position),

    #[error("snake segment {0:?} appears more than once")]
    OverlappingSegments(Position),

    #[error("food position {0:?} lies outside the grid")]
    FoodOutOfBounds(Position),

    #[error("food position {0:?} is covered by the snake")]
    FoodOnSnake(Position),

    #[error("unknown direction '{0}', expected one of U, D, L, R")]
    UnknownDirection(char),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
