//! rust-life CLI
//!
//! Seed a grid from a preset or from coordinates, then step through
//! generations one Enter at a time.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use rust_life::core::{LifeRng, SimConfig, DEFAULT_COLS, DEFAULT_ROWS};
use rust_life::grid::Boundary;
use rust_life::shell::{parse_points, Preset, Shell, ShellError};
use rust_life::sim::Simulator;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Conway's Game of Life on a bounded grid
#[derive(Parser, Debug)]
#[command(name = "rust-life")]
#[command(about = "Step through Conway's Game of Life generations", long_about = None)]
struct Args {
    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Seed for the random preset (random from entropy if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Starting configuration (asked interactively if omitted)
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// Custom starting cells as "row,col row,col ..."
    #[arg(long, conflicts_with = "preset")]
    points: Option<String>,

    /// Wrap neighbors around the edges instead of treating them as empty
    #[arg(long)]
    wrap: bool,

    /// Print this many generations and exit instead of waiting for Enter
    #[arg(long)]
    steps: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the grid.
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ShellError> {
    let boundary = if args.wrap {
        Boundary::Toroidal
    } else {
        Boundary::Clamped
    };
    let mut config = SimConfig::new(args.rows, args.cols).with_boundary(boundary);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut sim = Simulator::from_config(&config)?;
    let mut rng = config.seed.map_or_else(LifeRng::from_entropy, LifeRng::new);
    info!(
        "{}x{} grid, {} boundary, seed={}",
        config.rows,
        config.cols,
        config.boundary,
        rng.seed()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    if let Some(points) = &args.points {
        sim.load_points(parse_points(points)?)?;
    } else {
        let preset = match args.preset {
            Some(preset) => preset,
            None => shell.prompt_preset()?,
        };
        shell.seed(&mut sim, preset, &mut rng)?;
    }

    match args.steps {
        Some(steps) => shell.run_batch(&mut sim, steps),
        None => shell.run(&mut sim).map(|_| ()),
    }
}
