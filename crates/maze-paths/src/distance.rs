use maze_core::Position;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for unit-cost 4-directional movement.
#[inline]
pub fn manhattan(a: Position, b: Position) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

/// Chebyshev (L∞) distance between two positions.
///
/// Never exceeds [`manhattan`], so it is admissible here too, just less
/// informed.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> u32 {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col)) as u32
}

/// The zero heuristic. A* degenerates to uniform-cost search.
#[inline]
pub fn zero(_: Position, _: Position) -> u32 {
    0
}
