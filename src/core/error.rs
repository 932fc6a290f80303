//! Error types for grid access and seeding.

use thiserror::Error;

use super::Coord;

/// Errors reported by the engine.
///
/// Only seeding and direct cell access can fail. Advancing a generation is
/// total.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Coordinate outside the grid extent.
    #[error("coordinate ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Zero rows or columns.
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Text that does not read as a `row,col` pair.
    #[error("cannot parse `{input}` as a row,col coordinate")]
    Parse { input: String },
}

impl LifeError {
    /// Creates an out-of-bounds error for a coordinate on a `rows x cols` grid.
    pub fn out_of_bounds(coord: Coord, rows: usize, cols: usize) -> Self {
        Self::OutOfBounds {
            row: coord.row,
            col: coord.col,
            rows,
            cols,
        }
    }

    /// Creates a parse error.
    pub fn parse(input: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
        }
    }
}
