use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::direction::{direction_change_is_valid, Direction};
use crate::grid::GridSize;

/// Maximum number of turns that may wait for upcoming ticks.
pub const MAX_PENDING_TURNS: usize = 2;

/// Grid position in `(row, column)` cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    #[must_use]
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns the neighbouring position one cell along `direction`.
    #[must_use]
    pub fn translated(self, direction: Direction) -> Self {
        let (row_delta, column_delta) = direction.delta();
        Self {
            row: self.row + row_delta,
            column: self.column + column_delta,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.row >= 0
            && self.column >= 0
            && self.row < i32::from(bounds.rows)
            && self.column < i32::from(bounds.columns)
    }
}

/// Snake body plus its direction and turn buffering.
///
/// The body is only mutated through `push_head` / `pop_tail`, which the game
/// state pairs with grid updates so both views stay in sync.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_turns: VecDeque<Direction>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_turns: VecDeque::with_capacity(MAX_PENDING_TURNS),
        }
    }

    /// Queues a turn for an upcoming tick.
    ///
    /// The turn is validated against the most recently queued direction, or
    /// the current one when nothing is queued. Repeats and reversals are
    /// refused, as is anything beyond `MAX_PENDING_TURNS`. Returns whether the
    /// turn was queued.
    pub fn queue_turn(&mut self, direction: Direction) -> bool {
        if self.pending_turns.len() >= MAX_PENDING_TURNS {
            debug!("turn {direction:?} dropped, queue full");
            return false;
        }

        let last = self.pending_turns.back().copied().unwrap_or(self.direction);
        if !direction_change_is_valid(last, direction) {
            debug!("turn {direction:?} rejected after {last:?}");
            return false;
        }

        debug!("turn {direction:?} queued");
        self.pending_turns.push_back(direction);
        true
    }

    /// Consumes at most one queued turn, making it the current direction.
    pub fn apply_next_turn(&mut self) {
        if let Some(next) = self.pending_turns.pop_front() {
            self.direction = next;
        }
    }

    /// Returns the head position one step along the current direction.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().translated(self.direction)
    }

    pub(crate) fn push_head(&mut self, position: Position) {
        self.body.push_front(position);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over queued turns, oldest first.
    pub fn pending_turns(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending_turns.iter().copied()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction;
    use crate::grid::GridSize;

    use super::{Position, Snake, MAX_PENDING_TURNS};

    fn horizontal_snake(direction: Direction) -> Snake {
        Snake::from_segments(
            vec![
                Position::new(2, 3),
                Position::new(2, 2),
                Position::new(2, 1),
            ],
            direction,
        )
    }

    #[test]
    fn position_bounds_cover_edges() {
        let bounds = GridSize {
            rows: 4,
            columns: 6,
        };

        assert!(Position::new(0, 0).is_within_bounds(bounds));
        assert!(Position::new(3, 5).is_within_bounds(bounds));
        assert!(!Position::new(-1, 0).is_within_bounds(bounds));
        assert!(!Position::new(4, 0).is_within_bounds(bounds));
        assert!(!Position::new(0, 6).is_within_bounds(bounds));
    }

    #[test]
    fn translation_follows_row_column_axes() {
        let origin = Position::new(2, 2);

        assert_eq!(origin.translated(Direction::Up), Position::new(1, 2));
        assert_eq!(origin.translated(Direction::Down), Position::new(3, 2));
        assert_eq!(origin.translated(Direction::Left), Position::new(2, 1));
        assert_eq!(origin.translated(Direction::Right), Position::new(2, 3));
    }

    #[test]
    fn head_and_tail_are_body_ends() {
        let snake = horizontal_snake(Direction::Right);

        assert_eq!(snake.head(), Position::new(2, 3));
        assert_eq!(snake.tail(), Position::new(2, 1));
        assert_eq!(snake.next_head_position(), Position::new(2, 4));
    }

    #[test]
    fn turn_queue_rejects_reverse_of_current() {
        let mut snake = horizontal_snake(Direction::Right);

        assert!(!snake.queue_turn(Direction::Left));
        assert!(!snake.queue_turn(Direction::Right));
        assert_eq!(snake.pending_turns().count(), 0);
    }

    #[test]
    fn turn_queue_validates_against_last_queued() {
        let mut snake = horizontal_snake(Direction::Right);

        assert!(snake.queue_turn(Direction::Up));
        // Down reverses the queued Up, even though it is fine against Right.
        assert!(!snake.queue_turn(Direction::Down));
        assert!(snake.queue_turn(Direction::Left));

        let queued: Vec<_> = snake.pending_turns().collect();
        assert_eq!(queued, vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn turn_queue_drops_requests_beyond_capacity() {
        let mut snake = horizontal_snake(Direction::Right);

        assert!(snake.queue_turn(Direction::Up));
        assert!(snake.queue_turn(Direction::Right));
        assert!(!snake.queue_turn(Direction::Down));

        assert_eq!(snake.pending_turns().count(), MAX_PENDING_TURNS);
    }

    #[test]
    fn one_turn_is_consumed_per_step() {
        let mut snake = horizontal_snake(Direction::Right);
        snake.queue_turn(Direction::Down);
        snake.queue_turn(Direction::Left);

        snake.apply_next_turn();
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.pending_turns().count(), 1);

        snake.apply_next_turn();
        assert_eq!(snake.direction(), Direction::Left);

        snake.apply_next_turn();
        assert_eq!(snake.direction(), Direction::Left);
    }
}
