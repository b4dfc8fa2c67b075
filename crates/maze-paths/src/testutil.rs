//! Shared fixtures for the search tests.

use maze_core::{Grid, Position};

use crate::traits::Pather;

/// Build a grid from row literals, panicking on invalid input.
pub(crate) fn grid(rows: &[&[i32]]) -> Grid {
    let codes: Vec<Vec<i32>> = rows.iter().map(|r| r.to_vec()).collect();
    Grid::new(&codes).unwrap()
}

/// Positions from `(row, col)` pairs.
pub(crate) fn path(cells: &[(usize, usize)]) -> Vec<Position> {
    cells.iter().copied().map(Position::from).collect()
}

/// Assert `p` runs `start` → `goal` through graph edges only.
pub(crate) fn assert_valid_path<P: Pather>(pather: &P, p: &[Position], start: Position, goal: Position) {
    assert_eq!(p.first(), Some(&start));
    assert_eq!(p.last(), Some(&goal));
    for pair in p.windows(2) {
        assert!(
            pather.edges(pair[0]).iter().any(|e| e.to == pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

/// A seeded random maze with start top-left and goal bottom-right.
pub(crate) fn random_grid(seed: u64, rows: usize, cols: usize, density: f64) -> Grid {
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    let codes: Vec<Vec<i32>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    if (r, c) == (0, 0) {
                        2
                    } else if (r, c) == (rows - 1, cols - 1) {
                        3
                    } else if rng.random_bool(density) {
                        1
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();
    Grid::new(&codes).unwrap()
}
