//! Simulation: seeding and generation transitions.
//!
//! The `Simulator` owns the only `Grid`. Seeding operations clear it and
//! place live cells; `advance` replaces the whole generation at once.
//!
//! With the `parallel` feature, rows of the next generation are computed on
//! the rayon pool. Each worker reads the same frozen grid and writes its own
//! row of the scratch buffer, so results match the serial path exactly.

pub mod patterns;
pub mod simulator;
pub mod stats;

pub use patterns::{Pattern, GLIDER, SEMAPHORE};
pub use simulator::{Simulator, RANDOM_FILL_PROBABILITY};
pub use stats::StepStats;
