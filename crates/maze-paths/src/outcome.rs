use maze_core::Position;

/// Result of one search call.
///
/// An unreachable goal is a normal outcome, not an error: `path` is `None`
/// and `explored` still reports the work done.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Start → goal inclusive, or `None` if the goal was not reached.
    pub path: Option<Vec<Position>>,
    /// Number of nodes taken off the frontier, including the goal.
    pub explored: usize,
}

impl SearchOutcome {
    pub fn found(path: Vec<Position>, explored: usize) -> Self {
        Self {
            path: Some(path),
            explored,
        }
    }

    pub fn not_found(explored: usize) -> Self {
        Self {
            path: None,
            explored,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of positions on the path, start and goal included.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    /// Number of moves on the path (unit weights).
    #[inline]
    pub fn cost(&self) -> Option<usize> {
        self.path_len().map(|n| n.saturating_sub(1))
    }
}
