//! Grid coordinates.

use dropship_core::Action;
use std::fmt;

/// A `(row, column)` coordinate on the grid.
///
/// Rows increase downward. Coordinates are signed so an intent projection
/// can step off the edge of the grid; [`Cell::in_bounds`] decides whether
/// the result is a legal cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, increasing downward.
    pub y: i32,
    /// Column index.
    pub x: i32,
}

impl Cell {
    /// Create a cell at `(y, x)`.
    pub fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// The cell this action's offset leads to. May be out of bounds.
    pub fn step(self, action: Action) -> Cell {
        let (dy, dx) = action.offset();
        Cell {
            y: self.y + dy,
            x: self.x + dx,
        }
    }

    /// Whether this cell lies inside an N×N grid with `side = N`.
    pub fn in_bounds(self, side: u32) -> bool {
        let n = side as i32;
        self.y >= 0 && self.y < n && self.x >= 0 && self.x < n
    }

    /// Row-major flat index of this cell. Caller must ensure
    /// [`in_bounds`](Cell::in_bounds).
    pub fn flat(self, side: u32) -> usize {
        debug_assert!(self.in_bounds(side));
        (self.y as usize) * (side as usize) + (self.x as usize)
    }

    /// Inverse of [`flat`](Cell::flat).
    pub fn from_flat(index: usize, side: u32) -> Cell {
        let side = side as usize;
        Cell {
            y: (index / side) as i32,
            x: (index % side) as i32,
        }
    }

    /// Manhattan (L1) distance to another cell.
    pub fn l1(self, other: Cell) -> u32 {
        self.y.abs_diff(other.y) + self.x.abs_diff(other.x)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}
