//! Simulation configuration.
//!
//! `SimConfig` carries everything needed to build a `Simulator`:
//! - grid dimensions (20x20 unless told otherwise)
//! - boundary policy (clamped unless told otherwise)
//! - an optional seed for random fills
//!
//! The rule set is fixed and is not part of the configuration.

use serde::{Deserialize, Serialize};

use super::LifeError;
use crate::grid::Boundary;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 20;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 20;

/// Configuration for a simulation.
///
/// ```
/// use rust_life::core::SimConfig;
/// use rust_life::grid::Boundary;
///
/// let config = SimConfig::new(32, 48)
///     .with_boundary(Boundary::Toroidal)
///     .with_seed(7);
///
/// assert_eq!(config.rows, 32);
/// assert_eq!(config.boundary, Boundary::Toroidal);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// How neighbor queries treat positions past the edge.
    pub boundary: Boundary,

    /// Seed for random fills. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            boundary: Boundary::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Create a configuration with the given dimensions.
    ///
    /// Dimensions are checked by `validate`, not here, so configurations
    /// built from user input can be reported rather than panicking.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the boundary policy.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the random-fill seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that both dimensions are positive and the cell count fits in
    /// a `usize`.
    pub fn validate(&self) -> Result<(), LifeError> {
        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(LifeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
