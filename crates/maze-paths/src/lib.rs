//! Search algorithms for grid mazes.
//!
//! A validated [`maze_core::Grid`] is first turned into an [`AdjacencyGraph`];
//! every search then runs against the graph through the [`Pather`] trait:
//!
//! - **Breadth-first** search ([`bfs`]) — FIFO frontier, shortest path in
//!   edge count.
//! - **Depth-first** search ([`dfs`]) — LIFO frontier, some path if one exists.
//! - **A\*** search ([`astar`]) — priority frontier ordered by `f = g + h`,
//!   with a pluggable [`Heuristic`].
//!
//! Each call owns its frontier, visited sets and node arena, so searches are
//! independent and may run concurrently against the same graph. All of them
//! return a [`SearchOutcome`]: the path (if any) plus how many nodes were
//! taken off the frontier.
//!
//! # Trait seams
//!
//! | Trait | Used by |
//! |---|---|
//! | [`Pather`] | BFS, DFS, A* |
//! | [`Heuristic`] | A* |

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod graph;
mod node;
mod outcome;
mod traits;

pub use algorithm::{Algorithm, HeuristicKind, ParseNameError};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::{chebyshev, manhattan, zero};
pub use graph::{AdjacencyGraph, Edge};
pub use node::{NodeId, SearchNode, SearchTree};
pub use outcome::SearchOutcome;
pub use traits::{Heuristic, Pather};

#[cfg(test)]
pub(crate) mod testutil;
