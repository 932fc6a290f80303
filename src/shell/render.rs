//! Text rendering of a generation.

use std::fmt;

use crate::core::Cell;
use crate::grid::Grid;

/// Glyph for a live cell.
pub const ALIVE_GLYPH: char = 'X';

/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = '.';

/// Display glyph for a cell.
#[must_use]
pub const fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Alive => ALIVE_GLYPH,
        Cell::Dead => DEAD_GLYPH,
    }
}

/// Render a grid as text: one line per row, each cell followed by a space.
///
/// ```
/// use rust_life::core::Cell;
/// use rust_life::grid::Grid;
/// use rust_life::shell::render;
///
/// let mut grid = Grid::new(2, 3);
/// grid.set(0, 1, Cell::Alive).unwrap();
///
/// assert_eq!(render(&grid), ". X . \n. . . \n");
/// ```
#[must_use]
pub fn render(grid: &Grid) -> String {
    grid.to_string()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                write!(f, "{} ", glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
