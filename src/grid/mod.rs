//! Grid storage and boundary-aware neighbor queries.
//!
//! A `Grid` holds exactly one generation. It knows nothing about how the
//! next generation is computed; that is the simulator's job.

pub mod boundary;
pub mod board;

pub use boundary::{Boundary, NEIGHBOR_OFFSETS};
pub use board::{Grid, Neighbors};
