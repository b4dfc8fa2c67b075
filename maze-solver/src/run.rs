//! Timed execution of the selected searches.

use std::thread;
use std::time::{Duration, Instant};

use maze_core::Grid;
use maze_paths::{AdjacencyGraph, Algorithm, HeuristicKind, SearchOutcome};
use maze_term::ReportRow;

use crate::config::SolverConfig;

/// One finished search.
#[derive(Debug, Clone)]
pub struct Run {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

impl Run {
    fn timed(
        algorithm: Algorithm,
        graph: &AdjacencyGraph,
        grid: &Grid,
        heuristic: HeuristicKind,
    ) -> Self {
        let t0 = Instant::now();
        let outcome = algorithm.run(graph, grid.start(), grid.goal(), heuristic);
        let elapsed = t0.elapsed();
        log::info!(
            "{algorithm}: found={} explored={} in {elapsed:?}",
            outcome.is_found(),
            outcome.explored
        );
        Self {
            algorithm,
            outcome,
            elapsed,
        }
    }

    /// Row for the comparison table.
    pub fn report_row(&self) -> ReportRow {
        ReportRow {
            name: self.algorithm.label().to_string(),
            outcome: self.outcome.clone(),
            elapsed: Some(self.elapsed),
        }
    }
}

/// Run every algorithm in `cfg.algorithms` against `graph`.
///
/// With `cfg.parallel` each search gets its own scoped thread; the graph is
/// only read, so no synchronization is needed. Results are returned in the
/// configured order either way.
pub fn run_all(grid: &Grid, graph: &AdjacencyGraph, cfg: &SolverConfig) -> Vec<Run> {
    if !cfg.parallel {
        return cfg
            .algorithms
            .iter()
            .map(|&alg| Run::timed(alg, graph, grid, cfg.heuristic))
            .collect();
    }

    thread::scope(|s| {
        let handles: Vec<_> = cfg
            .algorithms
            .iter()
            .map(|&alg| s.spawn(move || Run::timed(alg, graph, grid, cfg.heuristic)))
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(run) => run,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
