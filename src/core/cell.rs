//! Cell state and the standard birth/survival rule.
//!
//! A cell is either `Alive` or `Dead`. There is no pending or unknown
//! state: the next state of a cell is always derived from the previous
//! generation, never from a partially updated one.

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Populated cell.
    Alive,
    /// Empty cell.
    #[default]
    Dead,
}

impl Cell {
    /// Check if the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Compute the next state of a cell given its live neighbor count.
    ///
    /// | current | neighbors | next  |
    /// |---------|-----------|-------|
    /// | Alive   | 2 or 3    | Alive |
    /// | Alive   | other     | Dead  |
    /// | Dead    | 3         | Alive |
    /// | Dead    | other     | Dead  |
    ///
    /// ```
    /// use rust_life::core::Cell;
    ///
    /// assert_eq!(Cell::Alive.next(2), Cell::Alive);
    /// assert_eq!(Cell::Alive.next(4), Cell::Dead);
    /// assert_eq!(Cell::Dead.next(3), Cell::Alive);
    /// ```
    #[must_use]
    pub const fn next(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
