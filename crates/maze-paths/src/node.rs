use std::hash::{Hash, Hasher};

use maze_core::Position;

/// Index of a [`SearchNode`] inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A discovered search state.
///
/// `g` is the accumulated cost from the start and `h` the heuristic estimate
/// to the goal; blind searches leave `h` at zero and use `g` as depth.
///
/// Equality and hashing look at `pos` only. Frontier ordering for A* is a
/// separate type so the two contracts never mix.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub pos: Position,
    pub parent: Option<NodeId>,
    pub g: u32,
    pub h: u32,
}

impl SearchNode {
    /// Estimated total cost through this node.
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

/// Per-search arena of [`SearchNode`]s linked by parent indices.
///
/// A parent is always pushed before its children, so parent links only
/// point backwards and the nodes form a tree rooted at the first push.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the root node at `pos` with heuristic `h`.
    pub fn root(&mut self, pos: Position, h: u32) -> NodeId {
        self.insert(SearchNode {
            pos,
            parent: None,
            g: 0,
            h,
        })
    }

    /// Add a child of `parent` reached at cost `g`.
    pub fn child(&mut self, parent: NodeId, pos: Position, g: u32, h: u32) -> NodeId {
        debug_assert!(parent.0 < self.nodes.len(), "parent must already exist");
        self.insert(SearchNode {
            pos,
            parent: Some(parent),
            g,
            h,
        })
    }

    /// Add a child one unit step below `parent`, with no heuristic.
    pub fn step(&mut self, parent: NodeId, pos: Position) -> NodeId {
        let g = self.nodes[parent.0].g + 1;
        self.child(parent, pos, g, 0)
    }

    fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions from the root to `id`, both inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Position> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            let node = &self.nodes[i.0];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn path_runs_root_to_leaf() {
        let mut tree = SearchTree::new();
        let a = tree.root(Position::new(0, 0), 4);
        let b = tree.step(a, Position::new(0, 1));
        let _side = tree.step(a, Position::new(1, 0));
        let c = tree.step(b, Position::new(1, 1));
        assert_eq!(
            tree.path_to(c),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
        assert_eq!(tree.get(c).g, 2);
        assert_eq!(tree.path_to(a), vec![Position::new(0, 0)]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn reconstruction_is_idempotent() {
        let mut tree = SearchTree::new();
        let a = tree.root(Position::new(2, 2), 0);
        let b = tree.child(a, Position::new(2, 3), 1, 5);
        let c = tree.child(b, Position::new(3, 3), 2, 4);
        assert_eq!(tree.path_to(c), tree.path_to(c));
    }

    #[test]
    fn identity_ignores_costs() {
        let x = SearchNode {
            pos: Position::new(1, 1),
            parent: None,
            g: 3,
            h: 7,
        };
        let y = SearchNode {
            pos: Position::new(1, 1),
            parent: Some(NodeId(0)),
            g: 9,
            h: 0,
        };
        assert_eq!(x, y);
        assert_eq!(x.f(), 10);
        let set: HashSet<_> = [x, y].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
