use std::fmt;
use std::str::FromStr;

use maze_core::Position;

use crate::distance::{chebyshev, manhattan, zero};
use crate::outcome::SearchOutcome;
use crate::traits::Pather;
use crate::{astar, bfs, dfs};

/// The three search strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dfs, Self::AStar];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::AStar => "astar",
        }
    }

    /// Human-readable label for reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS (breadth-first)",
            Self::Dfs => "DFS (depth-first)",
            Self::AStar => "A*",
        }
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Run this algorithm. `heuristic` is only consulted by A*.
    pub fn run<P: Pather>(
        self,
        pather: &P,
        start: Position,
        goal: Position,
        heuristic: HeuristicKind,
    ) -> SearchOutcome {
        match self {
            Self::Bfs => bfs(pather, start, goal),
            Self::Dfs => dfs(pather, start, goal),
            Self::AStar => astar(pather, start, goal, heuristic.as_fn()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseNameError::new("algorithm", s)),
        }
    }
}

/// Built-in A* heuristics, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Chebyshev,
    Zero,
}

impl HeuristicKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
            Self::Zero => "zero",
        }
    }

    /// The distance function itself, for passing to [`astar`].
    pub fn as_fn(self) -> fn(Position, Position) -> u32 {
        match self {
            Self::Manhattan => manhattan,
            Self::Chebyshev => chebyshev,
            Self::Zero => zero,
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "chebyshev" => Ok(Self::Chebyshev),
            "zero" | "none" => Ok(Self::Zero),
            _ => Err(ParseNameError::new("heuristic", s)),
        }
    }
}

/// An unrecognized algorithm or heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    what: &'static str,
    name: String,
}

impl ParseNameError {
    fn new(what: &'static str, name: &str) -> Self {
        Self {
            what,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} \u{201c}{}\u{201d}", self.what, self.name)
    }
}

impl std::error::Error for ParseNameError {}
