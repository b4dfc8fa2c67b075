//! Maze solver — load a maze, run the selected searches, report.
//!
//! The binary in `main.rs` only parses arguments and prints; the pieces it
//! sequences live here so they can be tested without a terminal.

pub mod config;
pub mod run;

pub use config::{Cli, Command, SolverConfig, generator_config};
pub use run::{Run, run_all};
