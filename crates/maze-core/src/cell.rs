//! The [`CellKind`] type — what occupies a single grid position.

use std::fmt;

/// The kind of a maze cell.
///
/// Persisted mazes store cells as integer codes; [`CellKind::code`] and the
/// `TryFrom<i32>` impl map between the two one-to-one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
}

impl CellKind {
    /// All kinds, in code order.
    pub const ALL: [CellKind; 4] = [Self::Empty, Self::Wall, Self::Start, Self::Goal];

    /// The integer code used by the text format.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Self::Empty => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::Goal => 3,
        }
    }

    /// Whether a search may enter this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Single-character symbol used when drawing the maze.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'M',
        }
    }
}

impl TryFrom<i32> for CellKind {
    /// The unrecognized code.
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, i32> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Wall),
            2 => Ok(Self::Start),
            3 => Ok(Self::Goal),
            other => Err(other),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
