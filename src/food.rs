use rand::Rng;

use crate::grid::Grid;
use crate::snake::Position;

/// Picks a uniformly random empty cell, or `None` when the grid is full.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Option<Position> {
    let candidates: Vec<Position> = grid.empty_positions().collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
