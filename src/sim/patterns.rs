//! Built-in seed patterns.
//!
//! Offsets are absolute grid coordinates, not relative to a chosen origin.

use crate::core::Coord;

/// A named set of live cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Canonical glider in the top-left corner, heading down and right.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Three-cell horizontal blinker on row 8.
pub const SEMAPHORE: Pattern = Pattern {
    name: "Semaphore",
    cells: &[(8, 1), (8, 2), (8, 3)],
};

impl Pattern {
    /// Cells as coordinates.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied().map(Coord::from)
    }

    /// First cell, in pattern order, that is off a `rows x cols` grid.
    ///
    /// `None` means the whole pattern fits.
    #[must_use]
    pub fn first_outside(&self, rows: usize, cols: usize) -> Option<Coord> {
        self.coords().find(|c| c.row >= rows || c.col >= cols)
    }
}
