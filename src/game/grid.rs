//! Board geometry: cells and the square grid they live on.

use super::direction::Direction;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A position on the grid. Column `x`, row `y`, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`. May lie off the board.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan_distance(self, other: Cell) -> u32 {
        u32::from((self.x - other.x).unsigned_abs()) + u32::from((self.y - other.y).unsigned_abs())
    }
}

/// Square board of `cells` x `cells`, fixed for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: i16,
}

impl Grid {
    pub fn new(cells: i16) -> Self {
        Self { cells }
    }

    /// Side length in cells.
    pub fn cells(&self) -> i16 {
        self.cells
    }

    pub fn area(&self) -> usize {
        let side = self.cells.max(0) as usize;
        side * side
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.cells).contains(&cell.x) && (0..self.cells).contains(&cell.y)
    }

    /// Uniformly random cell, drawn independently on each call.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.cells), rng.gen_range(0..self.cells))
    }
}
