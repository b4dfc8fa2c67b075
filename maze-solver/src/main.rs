//! Command-line entry point: `solve` a maze file or `generate` one.
//!
//! Run: cargo run -- solve maze-solver/mazes/10x10.txt

use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use maze_core::Grid;
use maze_io::MazeGen;
use maze_paths::AdjacencyGraph;
use maze_solver_lib::{Cli, Command, SolverConfig, generator_config, run_all};
use maze_term::{ReportRow, render, write_comparison, write_result};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    dispatch(&cli.command)
}

fn dispatch(command: &Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Solve {
            file,
            algorithms,
            heuristic,
            no_render,
            color,
            parallel,
        } => {
            let cfg =
                SolverConfig::from_flags(algorithms, *heuristic, *no_render, *color, *parallel);
            let grid = maze_io::load(file)?;
            solve(&grid, &cfg)
        }
        Command::Generate {
            rows,
            cols,
            density,
            seed,
            out,
        } => {
            let cfg = generator_config(*rows, *cols, *density, *seed);
            let grid = MazeGen::from_config(&cfg).generate_with(&cfg)?;
            match out {
                Some(path) => {
                    maze_io::save(path, &grid)?;
                    log::info!("wrote {}x{} maze to {}", cfg.rows, cfg.cols, path.display());
                }
                None => io::stdout().write_all(maze_io::to_text(&grid).as_bytes())?,
            }
            Ok(())
        }
    }
}

fn solve(grid: &Grid, cfg: &SolverConfig) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut w = stdout.lock();

    if cfg.render {
        writeln!(w, "=== MAZE ===")?;
        write!(w, "{}", render(grid, None, cfg.style))?;
    }
    writeln!(w)?;
    writeln!(w, "Start: {}", grid.start())?;
    writeln!(w, "Goal: {}", grid.goal())?;
    writeln!(w, "Dimensions: {}x{}", grid.rows(), grid.cols())?;

    let graph = AdjacencyGraph::new(grid);
    writeln!(
        w,
        "Graph: {} nodes, {} edges",
        graph.len(),
        graph.edge_count() / 2
    )?;

    let runs = run_all(grid, &graph, cfg);
    for run in &runs {
        writeln!(w)?;
        write_result(&mut w, run.algorithm.label(), &run.outcome, Some(run.elapsed))?;
        if cfg.render {
            if let Some(path) = &run.outcome.path {
                writeln!(w, "\n=== SOLUTION: {} ===", run.algorithm.label())?;
                write!(w, "{}", render(grid, Some(path.as_slice()), cfg.style))?;
            }
        }
    }

    writeln!(w)?;
    let rows: Vec<ReportRow> = runs.iter().map(|r| r.report_row()).collect();
    write_comparison(&mut w, &rows)?;
    Ok(())
}
