//! Maze persistence and generation.
//!
//! - [`loader`]: the line-oriented text format (one row per line,
//!   whitespace-separated cell codes) in both directions.
//! - [`mapgen`]: seeded random mazes with the start in the top-left corner
//!   and the goal in the bottom-right one.

pub mod loader;
pub mod mapgen;

pub use loader::{LoadError, load, parse, save, to_text};
pub use mapgen::{DEFAULT_WALL_DENSITY, GenConfig, MazeGen};
