use std::collections::HashSet;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::{GameConfig, INITIAL_SNAKE_LENGTH, MIN_COLUMNS};
use crate::direction::Direction;
use crate::error::GameError;
use crate::food::spawn_position;
use crate::grid::{Grid, GridSize, GridValue};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// Result of a single call to [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved one cell; length unchanged.
    Moved,
    /// The snake ate food and grew by one segment.
    Ate,
    /// The head collided this tick.
    GameOver(DeathReason),
    /// The game had already ended; nothing changed.
    Halted,
}

/// Owned view of one frame, for renderers and logs.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub size: GridSize,
    pub cells: Vec<Vec<GridValue>>,
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

/// Complete mutable game state for one session.
///
/// The grid and the snake body are two views of the same board. They are only
/// changed together through `add_head` and `remove_tail`.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    rng: StdRng,
}

impl GameState {
    /// Creates a game whose food placement is seeded from entropy.
    pub fn new(size: GridSize) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(size: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    /// Creates a game from a loaded config.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        match config.seed {
            Some(seed) => Self::new_with_seed(config.grid_size(), seed),
            None => Self::new(config.grid_size()),
        }
    }

    /// Creates a game with the starting layout: a three-cell snake on the
    /// middle row at columns 1..=3 heading right, plus one food item.
    pub fn with_rng(size: GridSize, rng: StdRng) -> Result<Self, GameError> {
        if size.rows == 0 || size.columns < MIN_COLUMNS {
            return Err(GameError::GridTooSmall {
                rows: size.rows,
                columns: size.columns,
            });
        }

        let mut state = Self::empty(size, Direction::Right, rng);
        let row = i32::from(size.rows / 2);
        for column in 1..=INITIAL_SNAKE_LENGTH {
            state.add_head(Position::new(row, column));
        }
        state.add_food();

        Ok(state)
    }

    /// Creates a game from an explicit board.
    ///
    /// `segments` run head first. They are checked for bounds and overlap but
    /// not for contiguity, so callers must pass a connected body. When `food`
    /// is `None` a food item is placed at random, as it would be after eating.
    pub fn from_layout(
        size: GridSize,
        segments: Vec<Position>,
        direction: Direction,
        food: Option<Position>,
        seed: u64,
    ) -> Result<Self, GameError> {
        if size.rows == 0 || size.columns == 0 {
            return Err(GameError::GridTooSmall {
                rows: size.rows,
                columns: size.columns,
            });
        }
        if segments.is_empty() {
            return Err(GameError::EmptySnake);
        }

        let mut seen = HashSet::with_capacity(segments.len());
        for segment in &segments {
            if !segment.is_within_bounds(size) {
                return Err(GameError::SegmentOutOfBounds(*segment));
            }
            if !seen.insert(*segment) {
                return Err(GameError::OverlappingSegments(*segment));
            }
        }

        let mut state = Self::empty(size, direction, StdRng::seed_from_u64(seed));
        // Pushing tail first leaves the first segment at the head.
        for segment in segments.into_iter().rev() {
            state.add_head(segment);
        }

        match food {
            Some(position) if !position.is_within_bounds(size) => {
                return Err(GameError::FoodOutOfBounds(position));
            }
            Some(position) if seen.contains(&position) => {
                return Err(GameError::FoodOnSnake(position));
            }
            Some(position) => {
                state.grid.set(position, GridValue::Food);
                state.food = Some(position);
            }
            None => state.add_food(),
        }

        Ok(state)
    }

    fn empty(size: GridSize, direction: Direction, rng: StdRng) -> Self {
        Self {
            grid: Grid::new(size),
            snake: Snake::from_segments(Vec::new(), direction),
            food: None,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Consumes at most one queued turn, then moves the head one cell. Once the
    /// game is over further calls are no-ops that return `Halted`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status == GameStatus::GameOver {
            debug!("tick ignored, game already over");
            return TickOutcome::Halted;
        }

        self.tick_count += 1;
        self.snake.apply_next_turn();
        let new_head = self.snake.next_head_position();

        match self.will_hit(new_head) {
            GridValue::Outside => self.end(DeathReason::Wall),
            GridValue::Snake => self.end(DeathReason::SelfCollision),
            GridValue::Empty => {
                self.remove_tail();
                self.add_head(new_head);
                TickOutcome::Moved
            }
            GridValue::Food => {
                self.add_head(new_head);
                self.score += 1;
                self.food = None;
                self.add_food();
                TickOutcome::Ate
            }
        }
    }

    /// Queues a turn for an upcoming tick. Returns whether it was accepted.
    ///
    /// Turns that repeat or reverse the last queued direction are refused, as
    /// are turns beyond the two-deep queue and any turn after game over.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }

        self.snake.queue_turn(direction)
    }

    fn will_hit(&self, position: Position) -> GridValue {
        if !self.grid.contains(position) {
            return GridValue::Outside;
        }

        // The tail moves out of the way on this same tick.
        if position == self.snake.tail() {
            return GridValue::Empty;
        }

        self.grid.get(position)
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        info!(
            "game over ({reason:?}) after {} ticks, score {}, length {}",
            self.tick_count,
            self.score,
            self.snake.len()
        );
        TickOutcome::GameOver(reason)
    }

    fn add_head(&mut self, position: Position) {
        self.snake.push_head(position);
        self.grid.set(position, GridValue::Snake);
    }

    fn remove_tail(&mut self) {
        if let Some(tail) = self.snake.pop_tail() {
            self.grid.set(tail, GridValue::Empty);
        }
    }

    fn add_food(&mut self) {
        match spawn_position(&mut self.rng, &self.grid) {
            Some(position) => {
                debug!("food placed at {position:?}");
                self.grid.set(position, GridValue::Food);
                self.food = Some(position);
            }
            None => warn!("grid is full, no food placed"),
        }
    }

    #[must_use]
    pub fn head_position(&self) -> Position {
        self.snake.head()
    }

    #[must_use]
    pub fn tail_position(&self) -> Position {
        self.snake.tail()
    }

    /// Iterates over the snake body, head first.
    pub fn snake_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.segments()
    }

    #[must_use]
    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn pending_turns(&self) -> impl Iterator<Item = Direction> + '_ {
        self.snake.pending_turns()
    }

    #[must_use]
    pub fn food_position(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Copies out everything a renderer needs for one frame.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.grid.size(),
            cells: self.grid.rows().map(<[GridValue]>::to_vec).collect(),
            snake: self.snake.segments().collect(),
            food: self.food,
            direction: self.snake.direction(),
            score: self.score,
            tick_count: self.tick_count,
            status: self.status,
            death_reason: self.death_reason,
        }
    }
}
