//! Grid lattice types and the coordinate/grid mapper
//!
//! A grid-mode container (the desktop or a plain folder) snaps items to a
//! `cols x rows` lattice. Positions stay in pixel space; cells are derived
//! from them through [`GridSpec`].

mod mapper;
mod zoom;

pub use mapper::GridSpec;
pub use zoom::GridZoom;

use std::fmt;
use serde::{Deserialize, Serialize};

/// A `(col, row)` address in a grid-mode container's lattice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    /// Create a new cell address
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.col, self.row)
    }
}

/// Lattice dimensions of a grid-mode container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub cols: u32,
    pub rows: u32,
}

impl GridDims {
    /// Create new dimensions; both axes are kept at least one cell wide
    #[inline]
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Check if a cell lies inside the lattice
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    /// Clamp signed lattice coordinates into `[0, cols-1] x [0, rows-1]`
    #[inline]
    pub fn clamp(&self, col: i64, row: i64) -> Cell {
        Cell::new(
            col.clamp(0, (i64::from(self.cols) - 1).max(0)) as u32,
            row.clamp(0, (i64::from(self.rows) - 1).max(0)) as u32,
        )
    }

    /// Neighbour of `cell` one step in `direction`, clamped at the boundary
    #[inline]
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dc, dr) = direction.delta();
        self.clamp(i64::from(cell.col) + dc, i64::from(cell.row) + dr)
    }

    /// Longest axis, an upper bound on any straight walk through the lattice
    #[inline]
    pub fn max_dim(&self) -> u32 {
        self.cols.max(self.rows)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(col, row)))
    }
}

/// Direction occupants are pushed during chain displacement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Pick the displacement direction for a drag from `from` onto `to`
    ///
    /// Horizontal movement dominates; the row is only consulted when the
    /// column did not change. A drag that stays in the same cell pushes right.
    pub fn from_drag(from: Cell, to: Cell) -> Self {
        if from.col < to.col {
            Direction::Right
        } else if from.col > to.col {
            Direction::Left
        } else if from.row < to.row {
            Direction::Down
        } else if from.row > to.row {
            Direction::Up
        } else {
            Direction::Right
        }
    }

    /// Lattice delta for one step
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}
