//! Grid construction errors.

use std::fmt;

use crate::geom::Position;

/// Reasons a cell-code matrix cannot become a [`Grid`](crate::Grid).
///
/// Raised once at construction; a grid that exists is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMaze {
    /// No rows, or a first row with no columns.
    Empty,
    /// A row whose length differs from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A code with no matching [`CellKind`](crate::CellKind).
    UnknownCell { code: i32, at: Position },
    MissingStart,
    MissingGoal,
    DuplicateStart { first: Position, second: Position },
    DuplicateGoal { first: Position, second: Position },
}

impl fmt::Display for InvalidMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "invalid maze: no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::UnknownCell { code, at } => {
                write!(f, "invalid maze: unknown cell code {code} at {at}")
            }
            Self::MissingStart => write!(f, "invalid maze: no start cell"),
            Self::MissingGoal => write!(f, "invalid maze: no goal cell"),
            Self::DuplicateStart { first, second } => {
                write!(f, "invalid maze: start cells at both {first} and {second}")
            }
            Self::DuplicateGoal { first, second } => {
                write!(f, "invalid maze: goal cells at both {first} and {second}")
            }
        }
    }
}

impl std::error::Error for InvalidMaze {}
