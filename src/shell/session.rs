//! Interactive step loop.
//!
//! The shell asks how to seed the grid, then prints one generation at a
//! time. An empty line steps; any other input, or end of input, quits.

use std::io::{self, BufRead, Write};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use super::parse::parse_points;
use super::preset::Preset;
use super::render::render;
use crate::core::{Coord, LifeError};
use crate::sim::Simulator;

/// Errors surfaced by the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading the answer or writing the grid failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Seeding was rejected by the engine.
    #[error(transparent)]
    Life(#[from] LifeError),
}

/// Line-oriented front end over any reader and writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading answers from `input` and drawing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read one line. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask which preset to load.
    pub fn prompt_preset(&mut self) -> io::Result<Preset> {
        write!(
            self.output,
            "Select field spec to load ([G]lider, [S]emaphore, [R]andom or [C]ustom): "
        )?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        Ok(Preset::from_choice(&answer))
    }

    /// Ask for custom coordinates until a line parses.
    ///
    /// End of input yields no points.
    pub fn prompt_points(&mut self) -> io::Result<Vec<Coord>> {
        loop {
            write!(self.output, "Give custom format string: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Vec::new());
            };
            match parse_points(&line) {
                Ok(points) => return Ok(points),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Seed `sim` with `preset`, prompting for points when it is `Custom`.
    ///
    /// Custom points that fall off the grid are reported and asked for
    /// again.
    pub fn seed<G: Rng + ?Sized>(
        &mut self,
        sim: &mut Simulator,
        preset: Preset,
        rng: &mut G,
    ) -> Result<(), ShellError> {
        info!("Seeding with {}", preset);
        match preset {
            Preset::Glider => sim.load_glider()?,
            Preset::Semaphore => sim.load_semaphore()?,
            Preset::Random => sim.load_random(rng),
            Preset::Custom => loop {
                let points = self.prompt_points()?;
                match sim.load_points(points) {
                    Ok(()) => break,
                    Err(e @ LifeError::OutOfBounds { .. }) => writeln!(self.output, "{}", e)?,
                    Err(e) => return Err(e.into()),
                }
            },
        }
        Ok(())
    }

    fn draw(&mut self, sim: &Simulator) -> io::Result<()> {
        write!(self.output, "{}", render(sim.current()))?;
        self.output.flush()
    }

    /// Draw, then step on each empty line until anything else is entered.
    ///
    /// Returns the number of steps taken.
    pub fn run(&mut self, sim: &mut Simulator) -> Result<u64, ShellError> {
        let mut steps = 0;
        loop {
            self.draw(sim)?;
            writeln!(self.output, "Select one of the following options:")?;
            writeln!(self.output, "        (enter) Step")?;
            writeln!(self.output, "        (any)   Exit")?;
            self.output.flush()?;

            match self.read_line()? {
                Some(line) if line.trim_end_matches(['\r', '\n']).is_empty() => {
                    let stats = sim.advance();
                    steps += 1;
                    if stats.is_static() {
                        debug!("Generation {} is a still life", stats.generation);
                    }
                }
                _ => break,
            }
        }
        info!("Stopped after {} steps", steps);
        Ok(steps)
    }

    /// Draw `steps + 1` generations without waiting for input.
    pub fn run_batch(&mut self, sim: &mut Simulator, steps: u64) -> Result<(), ShellError> {
        self.draw(sim)?;
        for _ in 0..steps {
            sim.advance();
            writeln!(self.output)?;
            self.draw(sim)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LifeRng;

    fn shell(input: &str) -> Shell<&[u8], Vec<u8>> {
        Shell::new(input.as_bytes(), Vec::new())
    }

    fn output(shell: Shell<&[u8], Vec<u8>>) -> String {
        String::from_utf8(shell.into_inner().1).unwrap()
    }

    #[test]
    fn test_prompt_preset() {
        let mut sh = shell("s\n");
        assert_eq!(sh.prompt_preset().unwrap(), Preset::Semaphore);
        assert!(output(sh).starts_with("Select field spec"));
    }

    #[test]
    fn test_prompt_preset_eof_is_custom() {
        let mut sh = shell("");
        assert_eq!(sh.prompt_preset().unwrap(), Preset::Custom);
    }

    #[test]
    fn test_prompt_points_retries_bad_syntax() {
        let mut sh = shell("1;1\n1,1 2,2\n");
        let points = sh.prompt_points().unwrap();
        assert_eq!(points, vec![Coord::new(1, 1), Coord::new(2, 2)]);
        assert!(output(sh).contains("cannot parse `1;1`"));
    }

    #[test]
    fn test_seed_custom_retries_out_of_range() {
        let mut sim = Simulator::new(5, 5);
        let mut sh = shell("9,9\n0,0 4,4\n");
        sh.seed(&mut sim, Preset::Custom, &mut LifeRng::new(1)).unwrap();

        let alive: Vec<_> = sim.current().iter_alive().collect();
        assert_eq!(alive, vec![Coord::new(0, 0), Coord::new(4, 4)]);
        assert!(output(sh).contains("outside the 5x5 grid"));
    }

    #[test]
    fn test_seed_preset_too_large() {
        let mut sim = Simulator::new(5, 5);
        let mut sh = shell("");
        let err = sh.seed(&mut sim, Preset::Semaphore, &mut LifeRng::new(1));
        assert!(matches!(err, Err(ShellError::Life(LifeError::OutOfBounds { .. }))));
    }

    #[test]
    fn test_run_steps_until_other_input() {
        let mut sim = Simulator::new(20, 20);
        sim.load_semaphore().unwrap();

        let mut sh = shell("\n\nq\n");
        let steps = sh.run(&mut sim).unwrap();

        assert_eq!(steps, 2);
        assert_eq!(sim.generation(), 2);
        assert_eq!(output(sh).matches("(enter) Step").count(), 3);
    }

    #[test]
    fn test_run_stops_at_eof() {
        let mut sim = Simulator::new(4, 4);
        let mut sh = shell("\n");
        assert_eq!(sh.run(&mut sim).unwrap(), 1);
    }

    #[test]
    fn test_run_batch_draws_each_generation() {
        let mut sim = Simulator::new(3, 3);
        let mut sh = shell("");
        sh.run_batch(&mut sim, 2).unwrap();

        assert_eq!(sim.generation(), 2);
        let text = output(sh);
        assert_eq!(text.lines().filter(|l| *l == ". . . ").count(), 9);
    }
}
