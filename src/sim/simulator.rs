//! Generation-transition engine.

use rand::Rng;
use tracing::{debug, trace, warn};

use super::patterns::{Pattern, GLIDER, SEMAPHORE};
use super::stats::StepStats;
use crate::core::{Cell, Coord, LifeError, SimConfig};
use crate::grid::Grid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Probability that `load_random` makes a cell alive.
pub const RANDOM_FILL_PROBABILITY: f64 = 0.5;

/// Owns the current generation and advances it.
///
/// Every next state is computed into a scratch buffer from the unchanged
/// current generation; the buffers are swapped only once the whole grid is
/// done. Callers never observe a half-updated generation.
///
/// ## Usage
///
/// ```
/// use rust_life::sim::Simulator;
///
/// let mut sim = Simulator::new(20, 20);
/// sim.load_semaphore().unwrap();
/// assert_eq!(sim.population(), 3);
///
/// let stats = sim.advance();
/// assert_eq!(stats.generation, 1);
/// assert_eq!(stats.population, 3);
/// ```
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Current generation.
    grid: Grid,

    /// Next generation under construction. Same length as the grid.
    scratch: Vec<Cell>,

    /// Steps taken since the last seeding.
    generation: u64,
}

impl Simulator {
    /// Create a simulator over an all-dead `rows x cols` grid.
    ///
    /// Panics if either dimension is zero or the cell count overflows.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_grid(Grid::new(rows, cols))
    }

    /// Create a simulator from a configuration.
    pub fn from_config(config: &SimConfig) -> Result<Self, LifeError> {
        Ok(Self::with_grid(Grid::from_config(config)?))
    }

    /// Take ownership of an existing grid as generation 0.
    #[must_use]
    pub fn with_grid(grid: Grid) -> Self {
        let scratch = vec![Cell::Dead; grid.cells().len()];
        Self {
            grid,
            scratch,
            generation: 0,
        }
    }

    /// Read-only view of the current generation.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.grid
    }

    /// Steps taken since the last seeding.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation.
    #[must_use]
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    // === Seeding ===

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Clear, then place a pattern.
    ///
    /// If any cell of the pattern is off the grid, nothing is placed and the
    /// grid stays all dead.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<(), LifeError> {
        self.clear();

        if let Some(off) = pattern.first_outside(self.grid.rows(), self.grid.cols()) {
            warn!(
                "{} does not fit a {}x{} grid",
                pattern.name,
                self.grid.rows(),
                self.grid.cols()
            );
            return Err(LifeError::out_of_bounds(off, self.grid.rows(), self.grid.cols()));
        }

        for c in pattern.coords() {
            self.grid.set(c.row, c.col, Cell::Alive)?;
        }
        trace!("Loaded {} ({} cells)", pattern.name, pattern.cells.len());
        Ok(())
    }

    /// Clear, then place the glider at the top-left corner.
    ///
    /// Needs at least 3 rows and 3 columns.
    pub fn load_glider(&mut self) -> Result<(), LifeError> {
        self.load_pattern(&GLIDER)
    }

    /// Clear, then place a three-cell blinker on row 8, columns 1 to 3.
    ///
    /// Needs at least 9 rows and 4 columns.
    pub fn load_semaphore(&mut self) -> Result<(), LifeError> {
        self.load_pattern(&SEMAPHORE)
    }

    /// Make each cell independently alive with probability 0.5.
    ///
    /// Cells are drawn in row-major order, so a seeded `rng` always gives
    /// the same grid.
    pub fn load_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid
            .fill_with(|_| Cell::from(rng.gen_bool(RANDOM_FILL_PROBABILITY)));
        self.generation = 0;
        trace!("Random fill: {} live cells", self.grid.population());
    }

    /// Clear, then make each listed coordinate alive, in order.
    ///
    /// Stops at the first coordinate off the grid and returns `OutOfBounds`
    /// for it. Coordinates before it stay alive; nothing after it is
    /// touched.
    pub fn load_points<I>(&mut self, points: I) -> Result<(), LifeError>
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        self.clear();

        for point in points {
            let c = point.into();
            if let Err(e) = self.grid.set(c.row, c.col, Cell::Alive) {
                warn!("Rejected seed point {}: {}", c, e);
                return Err(e);
            }
        }
        trace!("Loaded {} custom points", self.grid.population());
        Ok(())
    }

    // === Transition ===

    /// Advance one generation.
    ///
    /// Alive cells with 2 or 3 live neighbors survive, dead cells with
    /// exactly 3 are born, everything else is dead next generation.
    pub fn advance(&mut self) -> StepStats {
        let cols = self.grid.cols();
        let grid = &self.grid;

        #[cfg(not(feature = "parallel"))]
        self.scratch
            .chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| step_row(grid, row, out));

        #[cfg(feature = "parallel")]
        self.scratch
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| step_row(grid, row, out));

        let (births, deaths) = grid.cells().iter().zip(&self.scratch).fold(
            (0, 0),
            |(b, d), (&now, &next)| match (now, next) {
                (Cell::Dead, Cell::Alive) => (b + 1, d),
                (Cell::Alive, Cell::Dead) => (b, d + 1),
                _ => (b, d),
            },
        );

        self.grid.swap_cells(&mut self.scratch);
        self.generation += 1;

        let stats = StepStats {
            generation: self.generation,
            population: self.grid.population(),
            births,
            deaths,
        };
        debug!(
            "Generation {}: population={} births={} deaths={}",
            stats.generation, stats.population, stats.births, stats.deaths
        );
        stats
    }
}

/// Compute one row of the next generation from a frozen grid.
fn step_row(grid: &Grid, row: usize, out: &mut [Cell]) {
    let current = &grid.cells()[row * grid.cols()..(row + 1) * grid.cols()];
    for (col, (next, &now)) in out.iter_mut().zip(current).enumerate() {
        *next = now.next(grid.live_neighbors(Coord::new(row, col)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LifeRng;
    use crate::grid::Boundary;

    fn alive(sim: &Simulator) -> Vec<(usize, usize)> {
        sim.current().iter_alive().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let sim = Simulator::new(20, 20);
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.current().rows(), 20);
    }

    #[test]
    fn test_load_glider() {
        let mut sim = Simulator::new(20, 20);
        sim.load_glider().unwrap();
        assert_eq!(alive(&sim), vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_load_glider_too_small() {
        let mut sim = Simulator::new(3, 2);
        assert!(matches!(
            sim.load_glider(),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_load_semaphore() {
        let mut sim = Simulator::new(20, 20);
        sim.load_semaphore().unwrap();
        assert_eq!(alive(&sim), vec![(8, 1), (8, 2), (8, 3)]);
    }

    #[test]
    fn test_load_semaphore_too_small() {
        let mut sim = Simulator::new(8, 8);
        sim.load_glider().unwrap();
        assert_eq!(
            sim.load_semaphore(),
            Err(LifeError::OutOfBounds {
                row: 8,
                col: 1,
                rows: 8,
                cols: 8
            })
        );
        assert_eq!(sim.population(), 0, "failed preset must still clear");
    }

    #[test]
    fn test_seeding_clears_previous() {
        let mut sim = Simulator::new(20, 20);
        sim.load_glider().unwrap();
        sim.load_semaphore().unwrap();
        assert_eq!(sim.population(), 3);
    }

    #[test]
    fn test_seeding_resets_generation() {
        let mut sim = Simulator::new(10, 10);
        sim.load_glider().unwrap();
        sim.advance();
        sim.advance();
        assert_eq!(sim.generation(), 2);

        sim.load_points([(1, 1)]).unwrap();
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_load_points_prefix_kept() {
        let mut sim = Simulator::new(5, 5);
        let err = sim.load_points([(0, 0), (1, 1), (5, 0), (2, 2)]);
        assert_eq!(
            err,
            Err(LifeError::OutOfBounds {
                row: 5,
                col: 0,
                rows: 5,
                cols: 5
            })
        );
        assert_eq!(alive(&sim), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_load_random_deterministic() {
        let mut a = Simulator::new(12, 12);
        let mut b = Simulator::new(12, 12);
        a.load_random(&mut LifeRng::new(5));
        b.load_random(&mut LifeRng::new(5));
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn test_load_random_roughly_half() {
        let mut sim = Simulator::new(40, 40);
        sim.load_random(&mut LifeRng::new(11));
        let pop = sim.population();
        assert!((600..=1000).contains(&pop), "population {}", pop);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut sim = Simulator::new(20, 20);
        sim.load_semaphore().unwrap();

        let stats = sim.advance();
        assert_eq!(alive(&sim), vec![(7, 2), (8, 2), (9, 2)]);
        assert_eq!(stats.births, 2);
        assert_eq!(stats.deaths, 2);

        sim.advance();
        assert_eq!(alive(&sim), vec![(8, 1), (8, 2), (8, 3)]);
    }

    #[test]
    fn test_block_is_static() {
        let mut sim = Simulator::new(6, 6);
        sim.load_points([(2, 2), (2, 3), (3, 2), (3, 3)]).unwrap();
        let stats = sim.advance();
        assert!(stats.is_static());
        assert_eq!(stats.population, 4);
    }

    #[test]
    fn test_corner_block_survives_clamped() {
        // Each cell of a corner block still sees exactly 3 live neighbors.
        let mut sim = Simulator::new(4, 4);
        sim.load_points([(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap();
        sim.advance();
        assert_eq!(alive(&sim), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_toroidal_blinker_across_edge() {
        let config = SimConfig::new(5, 5).with_boundary(Boundary::Toroidal);
        let mut sim = Simulator::from_config(&config).unwrap();
        sim.load_points([(0, 4), (0, 0), (0, 1)]).unwrap();

        sim.advance();
        assert_eq!(alive(&sim), vec![(0, 0), (1, 0), (4, 0)]);
    }

    #[test]
    fn test_with_grid_keeps_cells() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::Alive).unwrap();
        let sim = Simulator::with_grid(grid.clone());
        assert_eq!(sim.current(), &grid);
        assert_eq!(sim.generation(), 0);
    }
}
