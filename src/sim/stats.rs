//! Per-step statistics.

/// What changed during one call to `Simulator::advance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Generation number after the step.
    pub generation: u64,

    /// Live cells after the step.
    pub population: usize,

    /// Cells that went from dead to alive.
    pub births: usize,

    /// Cells that went from alive to dead.
    pub deaths: usize,
}

impl StepStats {
    /// Check if the step left every cell unchanged.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }

    /// Net change in population over the step.
    #[must_use]
    pub fn delta(&self) -> i64 {
        self.births as i64 - self.deaths as i64
    }
}
