//! Deterministic grid-based Snake simulation.
//!
//! [`game::GameState`] owns the board and advances it one tick per call to
//! [`game::GameState::tick`]. Rendering, input capture and tick timing belong
//! to the caller.

pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod snake;

pub use direction::Direction;
pub use error::GameError;
pub use game::{DeathReason, GameState, GameStatus, Snapshot, TickOutcome};
pub use grid::{Grid, GridSize, GridValue};
pub use snake::Position;
