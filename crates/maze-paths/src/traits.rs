use maze_core::Position;

use crate::graph::Edge;

/// Minimal search interface — enumerates the weighted edges leaving a position.
pub trait Pather {
    /// Edges out of `p`, in the fixed neighbor order (up, down, left, right).
    ///
    /// Positions with no node (walls, out-of-grid) yield an empty slice,
    /// never an error.
    fn edges(&self, p: Position) -> &[Edge];
}

/// Distance estimate used to order the A* frontier.
///
/// Implementations must never overestimate the true remaining cost
/// (admissible) for A* to return optimal paths. Any
/// `Fn(Position, Position) -> u32` is a heuristic.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Position, to: Position) -> u32;
}

impl<F> Heuristic for F
where
    F: Fn(Position, Position) -> u32,
{
    #[inline]
    fn estimate(&self, from: Position, to: Position) -> u32 {
        self(from, to)
    }
}
