//! # rust-life
//!
//! Conway's Game of Life on a fixed-size grid.
//!
//! ## Design Principles
//!
//! 1. **Synchronous Update**: The next generation is a pure function of the
//!    current one. It is built in a separate buffer and swapped in whole.
//!
//! 2. **Explicit Boundary**: Off-grid neighbors are absent (`Clamped`)
//!    unless `Toroidal` is chosen. Nothing wraps silently.
//!
//! 3. **Checked Input**: Coordinates from outside are validated; writes past
//!    the grid return `LifeError::OutOfBounds`.
//!
//! ## Modules
//!
//! - `core`: Cell state and rule, coordinates, errors, RNG, configuration
//! - `grid`: One generation of cells and neighbor queries
//! - `sim`: Seeding presets and generation transitions
//! - `shell`: Text rendering, coordinate parsing, interactive step loop

pub mod core;
pub mod grid;
pub mod sim;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{Cell, Coord, LifeError, LifeRng, SimConfig};

pub use crate::grid::{Boundary, Grid};

pub use crate::sim::{Pattern, Simulator, StepStats};
