//! Command-line arguments and the configuration derived from them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use maze_io::{DEFAULT_WALL_DENSITY, GenConfig};
use maze_paths::{Algorithm, HeuristicKind};
use maze_term::RenderStyle;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a maze file and compare the algorithms.
    Solve {
        /// Maze file: one row per line, codes 0=empty 1=wall 2=start 3=goal.
        file: PathBuf,

        /// Algorithms to run, in order.
        #[arg(short, long, value_delimiter = ',', default_values_t = Algorithm::ALL)]
        algorithms: Vec<Algorithm>,

        /// Heuristic for A*.
        #[arg(long, default_value = "manhattan")]
        heuristic: HeuristicKind,

        /// Skip drawing the maze and the solutions.
        #[arg(long)]
        no_render: bool,

        /// Draw with terminal colors.
        #[arg(long)]
        color: bool,

        /// Run the algorithms on separate threads.
        #[arg(long)]
        parallel: bool,
    },
    /// Generate a random maze.
    Generate {
        #[arg(long, default_value_t = 10)]
        rows: usize,

        #[arg(long, default_value_t = 10)]
        cols: usize,

        /// Probability that a cell is a wall; clamped to [0, 1].
        #[arg(long, default_value_t = DEFAULT_WALL_DENSITY, value_parser = parse_density)]
        density: f64,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,

        /// Output file; stdout if omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if d.is_finite() {
        Ok(d)
    } else {
        Err(format!("density must be a finite number, got {s}"))
    }
}

/// Settings for one `solve` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub algorithms: Vec<Algorithm>,
    pub heuristic: HeuristicKind,
    pub render: bool,
    pub style: RenderStyle,
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            heuristic: HeuristicKind::Manhattan,
            render: true,
            style: RenderStyle::Plain,
            parallel: false,
        }
    }
}

impl SolverConfig {
    /// Settings from the `solve` flags.
    pub fn from_flags(
        algorithms: &[Algorithm],
        heuristic: HeuristicKind,
        no_render: bool,
        color: bool,
        parallel: bool,
    ) -> Self {
        Self {
            algorithms: algorithms.to_vec(),
            heuristic,
            render: !no_render,
            style: if color {
                RenderStyle::Color
            } else {
                RenderStyle::Plain
            },
            parallel,
        }
    }
}

impl Command {
    /// Solver settings, if this is a `solve` command.
    pub fn solver_config(&self) -> Option<SolverConfig> {
        match self {
            Self::Solve {
                algorithms,
                heuristic,
                no_render,
                color,
                parallel,
                ..
            } => Some(SolverConfig::from_flags(
                algorithms, *heuristic, *no_render, *color, *parallel,
            )),
            Self::Generate { .. } => None,
        }
    }

    /// Generator settings, if this is a `generate` command.
    pub fn gen_config(&self) -> Option<GenConfig> {
        match self {
            Self::Generate {
                rows,
                cols,
                density,
                seed,
                ..
            } => Some(generator_config(*rows, *cols, *density, *seed)),
            Self::Solve { .. } => None,
        }
    }
}

/// Generator settings from the `generate` flags.
pub fn generator_config(rows: usize, cols: usize, density: f64, seed: Option<u64>) -> GenConfig {
    GenConfig {
        rows,
        cols,
        wall_density: density,
        seed,
    }
}
