//! Boundary policies for neighbor queries.
//!
//! The policy decides what happens to a neighbor offset that steps past the
//! grid edge:
//! - `Clamped`: the position does not exist and contributes nothing
//! - `Toroidal`: the position wraps to the opposite edge
//!
//! `Clamped` is the default. Wrapping is never applied unless chosen.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// The eight offsets of the 3x3 neighborhood, excluding `(0, 0)`.
///
/// Ordered top-left to bottom-right.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// What lies beyond the grid edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boundary {
    /// Off-grid positions are absent. Corner cells have at most 3
    /// neighbors, edge cells at most 5.
    #[default]
    Clamped,
    /// Off-grid positions wrap around.
    Toroidal,
}

impl Boundary {
    /// Resolve `origin + (d_row, d_col)` on a `rows x cols` grid.
    ///
    /// Returns `None` when the position does not exist under this policy.
    /// `origin` must already be on the grid.
    #[must_use]
    pub fn resolve(
        self,
        origin: Coord,
        d_row: isize,
        d_col: isize,
        rows: usize,
        cols: usize,
    ) -> Option<Coord> {
        match self {
            Boundary::Clamped => {
                let c = origin.offset(d_row, d_col)?;
                (c.row < rows && c.col < cols).then_some(c)
            }
            Boundary::Toroidal => Some(Coord::new(
                wrap(origin.row, d_row, rows),
                wrap(origin.col, d_col, cols),
            )),
        }
    }
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::Clamped => write!(f, "clamped"),
            Boundary::Toroidal => write!(f, "toroidal"),
        }
    }
}
