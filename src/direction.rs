use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Canonical movement directions for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in clockwise order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the translation vector as `(row_delta, column_delta)`.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = GameError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            other => Err(GameError::UnknownDirection(other)),
        }
    }
}

/// Returns whether `next` may follow `last` in the turn queue.
///
/// Repeating the last direction is a no-op and reversing it would drive the
/// head straight into the neck, so both are refused.
#[must_use]
pub fn direction_change_is_valid(last: Direction, next: Direction) -> bool {
    next != last && next != last.opposite()
}

#[cfg(test)]
mod tests {
    use super::{direction_change_is_valid, Direction};
    use crate::error::GameError;

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposite_deltas_cancel_out() {
        for direction in Direction::ALL {
            let (row, column) = direction.delta();
            let (back_row, back_column) = direction.opposite().delta();
            assert_eq!((row + back_row, column + back_column), (0, 0));
            assert_eq!(row.abs() + column.abs(), 1);
        }
    }

    #[test]
    fn direction_change_rejects_reverse_and_repeat() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Left, Direction::Right));
        assert!(!direction_change_is_valid(Direction::Right, Direction::Right));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Right));
    }

    #[test]
    fn script_characters_parse_case_insensitively() {
        assert_eq!(Direction::try_from('u').ok(), Some(Direction::Up));
        assert_eq!(Direction::try_from('R').ok(), Some(Direction::Right));
        assert!(matches!(
            Direction::try_from('x'),
            Err(GameError::UnknownDirection('X'))
        ));
    }
}
