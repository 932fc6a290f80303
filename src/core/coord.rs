//! Grid coordinates.

/// A `(row, col)` position on the grid.
///
/// Coordinates are 0-based. Whether a coordinate lies on a particular grid
/// is checked by the grid, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translate by a signed offset.
    ///
    /// Returns `None` if either component would go negative.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        assert_eq!(Coord::from((3, 4)), Coord::new(3, 4));
    }

    #[test]
    fn test_offset() {
        let c = Coord::new(1, 1);
        assert_eq!(c.offset(1, -1), Some(Coord::new(2, 0)));
        assert_eq!(c.offset(-2, 0), None);
        assert_eq!(c.offset(0, -2), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(8, 2)), "(8, 2)");
    }
}
