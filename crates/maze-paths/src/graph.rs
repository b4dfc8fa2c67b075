use maze_core::{Grid, Position};

use crate::traits::Pather;

/// A weighted edge to an orthogonal neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: Position,
    pub weight: u32,
}

/// Precomputed adjacency lists for every traversable cell of a [`Grid`].
///
/// Built once and read-only afterward. Lists are stored in a flat row-major
/// table; walls hold no list, so [`neighbors_of`](Self::neighbors_of) returns
/// an empty slice for them and for anything outside the grid.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    adjacency: Vec<Option<Vec<Edge>>>,
    rows: usize,
    cols: usize,
    nodes: usize,
    edges: usize,
}

impl AdjacencyGraph {
    /// Uniform cost of every move.
    pub const STEP_COST: u32 = 1;

    /// Build the graph from `grid`, keeping [`Grid::neighbors`] order.
    pub fn new(grid: &Grid) -> Self {
        let (rows, cols) = grid.dimensions();
        let mut adjacency = Vec::with_capacity(grid.len());
        let mut nodes = 0;
        let mut edges = 0;

        for p in grid.positions() {
            if !grid.is_traversable(p.row, p.col) {
                adjacency.push(None);
                continue;
            }
            let list: Vec<Edge> = grid
                .neighbors(p)
                .into_iter()
                .map(|to| Edge {
                    to,
                    weight: Self::STEP_COST,
                })
                .collect();
            nodes += 1;
            edges += list.len();
            adjacency.push(Some(list));
        }

        log::debug!("adjacency graph built: {nodes} nodes, {edges} directed edges");

        Self {
            adjacency,
            rows,
            cols,
            nodes,
            edges,
        }
    }

    /// Edges out of `p`; empty for walls and out-of-grid positions.
    #[inline]
    pub fn neighbors_of(&self, p: Position) -> &[Edge] {
        self.idx(p)
            .and_then(|i| self.adjacency[i].as_deref())
            .unwrap_or(&[])
    }

    /// Whether `p` is a node (a traversable cell) of the graph.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.idx(p).is_some_and(|i| self.adjacency[i].is_some())
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    /// Number of directed edges (each undirected link counts twice).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Position> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, list)| list.is_some())
            .map(|(i, _)| self.point(i))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    #[inline]
    fn idx(&self, p: Position) -> Option<usize> {
        if p.row >= self.rows || p.col >= self.cols {
            return None;
        }
        Some(p.row * self.cols + p.col)
    }

    #[inline]
    fn point(&self, idx: usize) -> Position {
        Position::new(idx / self.cols, idx % self.cols)
    }
}

impl Pather for AdjacencyGraph {
    #[inline]
    fn edges(&self, p: Position) -> &[Edge] {
        self.neighbors_of(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::grid;

    #[test]
    fn only_traversable_cells_are_nodes() {
        let g = grid(&[&[2, 0, 1], &[1, 0, 1], &[1, 0, 3]]);
        let graph = AdjacencyGraph::new(&g);
        assert_eq!(graph.len(), 5);
        assert!(graph.contains(g.start()));
        assert!(graph.contains(g.goal()));
        assert!(!graph.contains(Position::new(0, 2)));
        assert!(!graph.contains(Position::new(9, 9)));
        let nodes: Vec<_> = graph.nodes().collect();
        assert_eq!(
            nodes,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
        // A simple chain of 5 nodes: 4 links, 8 directed edges.
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn neighbor_lists_follow_grid_order_with_unit_weight() {
        let g = grid(&[&[0, 0, 0], &[0, 2, 0], &[0, 3, 0]]);
        let graph = AdjacencyGraph::new(&g);
        let center = Position::new(1, 1);
        let expected: Vec<Edge> = g
            .neighbors(center)
            .into_iter()
            .map(|to| Edge { to, weight: 1 })
            .collect();
        assert_eq!(graph.neighbors_of(center), expected.as_slice());
        assert_eq!(graph.neighbors_of(center)[0].to, Position::new(0, 1));
        assert_eq!(graph.neighbors_of(center)[3].to, Position::new(1, 2));
    }

    #[test]
    fn walls_and_outside_have_no_edges() {
        let g = grid(&[&[2, 1], &[0, 3]]);
        let graph = AdjacencyGraph::new(&g);
        assert!(graph.neighbors_of(Position::new(0, 1)).is_empty());
        assert!(graph.neighbors_of(Position::new(5, 0)).is_empty());
        assert!(graph.neighbors_of(Position::new(0, 2)).is_empty());
        assert_eq!(graph.edges(Position::new(1, 0)).len(), 2);
    }
}
