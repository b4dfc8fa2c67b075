//! The [`Grid`] type — an immutable, validated matrix of [`CellKind`]s.
//!
//! Cells are stored in a single row-major buffer. The start and goal
//! positions are located once during construction and never change.

use crate::cell::CellKind;
use crate::error::InvalidMaze;
use crate::geom::Position;

/// A rectangular maze with exactly one start and one goal cell.
///
/// The grid is not required to be square. Once built it is read-only, so it
/// can be shared freely between threads running independent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Build a grid from a matrix of integer cell codes
    /// (`0` empty, `1` wall, `2` start, `3` goal).
    ///
    /// Fails if the matrix is empty or ragged, contains an unknown code, or
    /// does not hold exactly one start and exactly one goal. A 1×1 matrix is
    /// therefore always rejected.
    pub fn new(codes: &[Vec<i32>]) -> Result<Self, InvalidMaze> {
        let rows = codes.len();
        let cols = codes.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(InvalidMaze::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        let mut start: Option<Position> = None;
        let mut goal: Option<Position> = None;

        for (r, line) in codes.iter().enumerate() {
            if line.len() != cols {
                return Err(InvalidMaze::RaggedRow {
                    row: r,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (c, &code) in line.iter().enumerate() {
                let at = Position::new(r, c);
                let kind = CellKind::try_from(code)
                    .map_err(|code| InvalidMaze::UnknownCell { code, at })?;
                match kind {
                    CellKind::Start => {
                        if let Some(first) = start {
                            return Err(InvalidMaze::DuplicateStart { first, second: at });
                        }
                        start = Some(at);
                    }
                    CellKind::Goal => {
                        if let Some(first) = goal {
                            return Err(InvalidMaze::DuplicateGoal { first, second: at });
                        }
                        goal = Some(at);
                    }
                    CellKind::Empty | CellKind::Wall => {}
                }
                cells.push(kind);
            }
        }

        let start = start.ok_or(InvalidMaze::MissingStart)?;
        let goal = goal.ok_or(InvalidMaze::MissingGoal)?;

        Ok(Self {
            cells,
            rows,
            cols,
            start,
            goal,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids. Present for API
    /// symmetry with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The unique start cell.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The unique goal cell.
    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// The cell at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Position) -> Option<CellKind> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[p.row * self.cols + p.col])
    }

    /// `true` iff (`row`, `col`) is in bounds and not a wall.
    #[inline]
    pub fn is_traversable(&self, row: usize, col: usize) -> bool {
        self.at(Position::new(row, col))
            .is_some_and(CellKind::is_traversable)
    }

    /// In-bounds, non-wall orthogonal neighbors of `p`, in the fixed order
    /// up, down, left, right.
    pub fn neighbors(&self, p: Position) -> Vec<Position> {
        p.cardinal()
            .filter(|n| self.is_traversable(n.row, n.col))
            .collect()
    }

    /// Every position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Position::new(r, c)))
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// The grid as a matrix of integer codes, suitable for [`Grid::new`].
    pub fn codes(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|k| k.code()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::new(&[vec![2, 0, 1], vec![1, 0, 1], vec![1, 0, 3]]).unwrap()
    }

    #[test]
    fn locates_start_and_goal() {
        let g = corridor();
        assert_eq!(g.dimensions(), (3, 3));
        assert_eq!(g.start(), Position::new(0, 0));
        assert_eq!(g.goal(), Position::new(2, 2));
        assert_eq!(g.at(g.start()), Some(CellKind::Start));
        assert_eq!(g.at(g.goal()), Some(CellKind::Goal));
    }

    #[test]
    fn non_square_grid() {
        let g = Grid::new(&[vec![2, 0, 0, 0], vec![1, 1, 0, 3]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 8);
        assert_eq!(g.goal(), Position::new(1, 3));
    }

    #[test]
    fn traversability() {
        let g = corridor();
        assert!(g.is_traversable(0, 0));
        assert!(g.is_traversable(1, 1));
        assert!(!g.is_traversable(0, 2));
        assert!(!g.is_traversable(3, 0));
        assert!(!g.is_traversable(0, 3));
    }

    #[test]
    fn neighbors_fixed_order_and_filtered() {
        let g = Grid::new(&[vec![0, 0, 0], vec![0, 2, 0], vec![0, 3, 1]]).unwrap();
        // up, down, left, right
        assert_eq!(
            g.neighbors(Position::new(1, 1)),
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
        // (2,2) is a wall, so (1,2) only has up and left.
        assert_eq!(
            g.neighbors(Position::new(1, 2)),
            vec![Position::new(0, 2), Position::new(1, 1)]
        );
        assert_eq!(
            g.neighbors(Position::new(0, 0)),
            vec![Position::new(1, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn empty_is_invalid() {
        assert_eq!(Grid::new(&[]), Err(InvalidMaze::Empty));
        assert_eq!(Grid::new(&[vec![]]), Err(InvalidMaze::Empty));
    }

    #[test]
    fn single_cell_is_invalid() {
        assert_eq!(Grid::new(&[vec![2]]), Err(InvalidMaze::MissingGoal));
        assert_eq!(Grid::new(&[vec![3]]), Err(InvalidMaze::MissingStart));
        assert!(Grid::new(&[vec![0]]).is_err());
    }

    #[test]
    fn ragged_rows_rejected() {
        assert_eq!(
            Grid::new(&[vec![2, 0], vec![3]]),
            Err(InvalidMaze::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(
            Grid::new(&[vec![2, 7], vec![0, 3]]),
            Err(InvalidMaze::UnknownCell {
                code: 7,
                at: Position::new(0, 1)
            })
        );
    }

    #[test]
    fn start_and_goal_must_be_unique() {
        assert_eq!(
            Grid::new(&[vec![0, 0], vec![0, 3]]),
            Err(InvalidMaze::MissingStart)
        );
        assert_eq!(
            Grid::new(&[vec![2, 0], vec![0, 0]]),
            Err(InvalidMaze::MissingGoal)
        );
        assert_eq!(
            Grid::new(&[vec![2, 2], vec![0, 3]]),
            Err(InvalidMaze::DuplicateStart {
                first: Position::new(0, 0),
                second: Position::new(0, 1)
            })
        );
        assert!(matches!(
            Grid::new(&[vec![2, 3], vec![3, 0]]),
            Err(InvalidMaze::DuplicateGoal { .. })
        ));
    }

    #[test]
    fn codes_round_trip() {
        let codes = vec![vec![2, 0, 1], vec![1, 0, 1], vec![1, 0, 3]];
        let g = Grid::new(&codes).unwrap();
        assert_eq!(g.codes(), codes);
        assert_eq!(Grid::new(&g.codes()).unwrap(), g);
    }

    #[test]
    fn positions_and_counts() {
        let g = corridor();
        let all: Vec<_> = g.positions().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[4], Position::new(1, 1));
        assert_eq!(g.count(CellKind::Wall), 4);
        assert_eq!(g.count(CellKind::Empty), 3);
        assert_eq!(g.count(CellKind::Start), 1);
    }

    #[test]
    fn error_messages() {
        let e = Grid::new(&[vec![2, 9]]).unwrap_err();
        assert_eq!(e.to_string(), "invalid maze: unknown cell code 9 at (0, 1)");
    }
}
