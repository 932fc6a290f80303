//! One generation of cell states.

use smallvec::SmallVec;

use super::boundary::{Boundary, NEIGHBOR_OFFSETS};
use crate::core::{Cell, Coord, LifeError, SimConfig};

/// Neighbor positions of a single cell. Never more than eight.
pub type Neighbors = SmallVec<[Coord; 8]>;

/// Fixed-size rectangular grid of cells.
///
/// Storage is row-major and owned exclusively by the grid. Dimensions are
/// set at construction and never change.
///
/// ## Usage
///
/// ```
/// use rust_life::core::Cell;
/// use rust_life::grid::Grid;
///
/// let mut grid = Grid::new(4, 4);
/// grid.set(1, 1, Cell::Alive).unwrap();
/// grid.set(1, 2, Cell::Alive).unwrap();
///
/// assert_eq!(grid.count_live_neighbors(0, 1).unwrap(), 2);
/// assert_eq!(grid.count_live_neighbors(1, 1).unwrap(), 1);
/// assert!(grid.set(4, 0, Cell::Alive).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    boundary: Boundary,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid with a clamped boundary.
    ///
    /// Panics if either dimension is zero or the cell count overflows.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Grid must have at least 1 row");
        assert!(cols > 0, "Grid must have at least 1 column");
        let len = rows.checked_mul(cols);
        assert!(len.is_some(), "Grid of {}x{} cells is too large", rows, cols);

        Self {
            rows,
            cols,
            boundary: Boundary::Clamped,
            cells: vec![Cell::Dead; len.unwrap_or_default()],
        }
    }

    /// Create an all-dead grid, reporting bad dimensions instead of panicking.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        SimConfig::new(rows, cols).validate()?;
        Ok(Self::new(rows, cols))
    }

    /// Create an all-dead grid from a configuration.
    pub fn from_config(config: &SimConfig) -> Result<Self, LifeError> {
        config.validate()?;
        Ok(Self::new(config.rows, config.cols).with_boundary(config.boundary))
    }

    /// Set the boundary policy.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Boundary policy used by neighbor queries.
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Check if a coordinate lies on the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn check(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        let coord = Coord::new(row, col);
        if self.contains(coord) {
            Ok(self.index(coord))
        } else {
            Err(LifeError::out_of_bounds(coord, self.rows, self.cols))
        }
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Get the state of a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, LifeError> {
        let idx = self.check(row, col)?;
        Ok(self.cells[idx])
    }

    /// Set the state of a cell.
    pub fn set(&mut self, row: usize, col: usize, state: Cell) -> Result<(), LifeError> {
        let idx = self.check(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Positions examined when counting neighbors of `(row, col)`.
    ///
    /// Under `Clamped` this is 3 for corners, 5 for edges and 8 inside.
    /// Under `Toroidal` on grids narrower than 3, wrapped offsets can land on
    /// the same position; each position appears once, and the cell itself
    /// never appears.
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Neighbors, LifeError> {
        self.check(row, col)?;
        Ok(self.neighbor_positions(Coord::new(row, col)))
    }

    fn neighbor_positions(&self, origin: Coord) -> Neighbors {
        let mut out = Neighbors::new();
        for &(d_row, d_col) in &NEIGHBOR_OFFSETS {
            if let Some(c) = self
                .boundary
                .resolve(origin, d_row, d_col, self.rows, self.cols)
            {
                if c != origin && !out.contains(&c) {
                    out.push(c);
                }
            }
        }
        out
    }

    /// Count live cells among the neighbors of `(row, col)`.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Result<u8, LifeError> {
        self.check(row, col)?;
        Ok(self.live_neighbors(Coord::new(row, col)))
    }

    /// Neighbor count for a coordinate already known to be on the grid.
    pub(crate) fn live_neighbors(&self, origin: Coord) -> u8 {
        self.neighbor_positions(origin)
            .iter()
            .filter(|&&c| self.cells[self.index(c)].is_alive())
            .count() as u8
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterate over live cells in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| Coord::new(i / cols, i % cols))
    }

    /// Cells of one row, or `None` past the last row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Set every cell to dead.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Assign every cell from `f`, visited in row-major order.
    pub(crate) fn fill_with(&mut self, mut f: impl FnMut(Coord) -> Cell) {
        let cols = self.cols;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(Coord::new(i / cols, i % cols));
        }
    }

    /// Exchange the cell storage with a buffer of the same length.
    pub(crate) fn swap_cells(&mut self, other: &mut Vec<Cell>) {
        debug_assert_eq!(other.len(), self.cells.len());
        std::mem::swap(&mut self.cells, other);
    }
}
