//! Core engine types: cells, coordinates, errors, RNG, configuration.
//!
//! These are shared by the grid, the simulator and the shell, and carry no
//! simulation logic beyond the per-cell rule in `Cell::next`.

pub mod cell;
pub mod coord;
pub mod error;
pub mod rng;
pub mod config;

pub use cell::Cell;
pub use coord::Coord;
pub use error::LifeError;
pub use rng::LifeRng;
pub use config::{SimConfig, DEFAULT_COLS, DEFAULT_ROWS};
