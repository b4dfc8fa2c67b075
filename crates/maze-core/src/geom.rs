//! Grid coordinates: [`Position`] and the fixed cardinal step order.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid coordinate. Rows grow downward, columns grow to the right.
///
/// Positions are plain values: two positions are equal iff both coordinates
/// match, which makes them usable directly as set members and map keys.
/// Ordering is row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Row/column deltas for the four orthogonal moves, in the order every
/// neighbor query uses: up, down, left, right.
///
/// Search traversal order (and therefore which path DFS finds, and how BFS
/// breaks ties) follows this order exactly.
pub const CARDINAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position shifted by (`dr`, `dc`), or `None` if that would
    /// leave the non-negative quadrant.
    #[inline]
    pub fn step(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// The up-to-four orthogonal neighbors in [`CARDINAL`] order, skipping
    /// steps that would underflow. No bounds check against any grid.
    pub fn cardinal(self) -> impl Iterator<Item = Position> {
        CARDINAL
            .into_iter()
            .filter_map(move |(dr, dc)| self.step(dr, dc))
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
