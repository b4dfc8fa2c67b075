//! **maze-core** — the grid model shared by the maze crates.
//!
//! This crate provides the value types every other crate builds on: grid
//! [`Position`]s, [`CellKind`]s, and the immutable, validated [`Grid`]. A
//! `Grid` can only be obtained through [`Grid::new`], which rejects malformed
//! input with an [`InvalidMaze`] error, so downstream code never has to
//! re-check dimensions or the uniqueness of the start and goal cells.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellKind;
pub use error::InvalidMaze;
pub use geom::Position;
pub use grid::Grid;
