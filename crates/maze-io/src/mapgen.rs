//! Random maze generation.
//!
//! Cells are drawn independently: each one is a wall with probability
//! `wall_density`, except the fixed start (top-left) and goal
//! (bottom-right) corners. Nothing guarantees the goal is reachable, which
//! makes the generated mazes useful for exercising the "no path" outcome
//! too.

use maze_core::{CellKind, Grid, InvalidMaze};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Wall density used when none (or a NaN) is given.
pub const DEFAULT_WALL_DENSITY: f64 = 0.25;

/// Parameters for [`MazeGen`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability (0.0–1.0) that an interior cell is a wall.
    pub wall_density: f64,
    /// Fixed seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            wall_density: DEFAULT_WALL_DENSITY,
            seed: None,
        }
    }
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<StdRng> {
    /// A generator seeded from `cfg.seed`, or from the OS if unset.
    pub fn from_config(cfg: &GenConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => rand::make_rng::<StdRng>(),
        };
        Self { rng }
    }
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Raw cell codes for a `rows`×`cols` maze.
    ///
    /// `wall_density` is clamped to \[0, 1\]; NaN means
    /// [`DEFAULT_WALL_DENSITY`].
    pub fn codes(&mut self, rows: usize, cols: usize, wall_density: f64) -> Vec<Vec<i32>> {
        let p = if wall_density.is_nan() {
            DEFAULT_WALL_DENSITY
        } else {
            wall_density.clamp(0.0, 1.0)
        };
        let mut codes = Vec::with_capacity(rows);
        for r in 0..rows {
            let mut line = Vec::with_capacity(cols);
            for c in 0..cols {
                let kind = if r == 0 && c == 0 {
                    CellKind::Start
                } else if r + 1 == rows && c + 1 == cols {
                    CellKind::Goal
                } else if self.rng.random_bool(p) {
                    CellKind::Wall
                } else {
                    CellKind::Empty
                };
                line.push(kind.code());
            }
            codes.push(line);
        }
        codes
    }

    /// Generate a validated grid.
    ///
    /// Fails for grids with fewer than two cells, which cannot hold both a
    /// start and a goal.
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
        wall_density: f64,
    ) -> Result<Grid, InvalidMaze> {
        let grid = Grid::new(&self.codes(rows, cols, wall_density))?;
        log::debug!(
            "generated {rows}x{cols} maze with {} walls",
            grid.count(CellKind::Wall)
        );
        Ok(grid)
    }

    /// Generate using the dimensions and density in `cfg` (its seed is
    /// ignored; the generator's own RNG is used).
    pub fn generate_with(&mut self, cfg: &GenConfig) -> Result<Grid, InvalidMaze> {
        self.generate(cfg.rows, cfg.cols, cfg.wall_density)
    }
}
