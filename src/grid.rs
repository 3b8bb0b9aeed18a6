use serde::{Deserialize, Serialize};

use crate::snake::Position;

/// Logical grid dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u16,
    pub columns: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }
}

/// Contents of a single cell.
///
/// `Outside` is only ever returned by lookups that fall off the grid; it is
/// never stored.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GridValue {
    Empty,
    Snake,
    Food,
    Outside,
}

/// Fixed-size cell buffer in row-major order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<GridValue>,
}

impl Grid {
    /// Allocates an all-empty grid.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![GridValue::Empty; size.total_cells()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.is_within_bounds(self.size)
    }

    /// Returns the cell value, or `Outside` when off the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> GridValue {
        self.index(position)
            .map_or(GridValue::Outside, |index| self.cells[index])
    }

    pub(crate) fn set(&mut self, position: Position, value: GridValue) {
        debug_assert!(value != GridValue::Outside, "Outside is never stored");
        debug_assert!(self.contains(position), "write outside grid at {position:?}");

        if let Some(index) = self.index(position) {
            self.cells[index] = value;
        }
    }

    /// Lazily scans the grid for empty cells in row-major order.
    ///
    /// Each call rescans the current contents.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = usize::from(self.size.columns);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == GridValue::Empty)
            .map(move |(index, _)| to_position(index, columns))
    }

    /// Counts cells holding `value`.
    #[must_use]
    pub fn count(&self, value: GridValue) -> usize {
        self.cells.iter().filter(|cell| **cell == value).count()
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridValue]> + '_ {
        self.cells.chunks(usize::from(self.size.columns).max(1))
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }

        let row = usize::try_from(position.row).ok()?;
        let column = usize::try_from(position.column).ok()?;
        Some(row * usize::from(self.size.columns) + column)
    }
}

fn to_position(index: usize, columns: usize) -> Position {
    // Both parts fit in i32 because rows and columns are u16.
    Position::new((index / columns) as i32, (index % columns) as i32)
}
