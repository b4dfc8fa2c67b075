use std::collections::HashSet;

use maze_core::Position;

use crate::node::SearchTree;
use crate::outcome::SearchOutcome;
use crate::traits::Pather;

/// Depth-first search from `start` to `goal`.
///
/// Same bookkeeping as [`bfs`](crate::bfs) but with a stack: positions are
/// marked visited when pushed, neighbors are pushed in the fixed
/// up/down/left/right order, and the most recent push is expanded next.
/// Terminates on any finite graph, but the path found is not necessarily
/// the shortest.
pub fn dfs<P: Pather>(pather: &P, start: Position, goal: Position) -> SearchOutcome {
    let mut tree = SearchTree::new();
    let mut visited: HashSet<Position> = HashSet::new();
    let mut stack = vec![tree.root(start, 0)];
    visited.insert(start);

    let mut explored = 0;
    while let Some(id) = stack.pop() {
        explored += 1;
        let pos = tree.get(id).pos;

        if pos == goal {
            let path = tree.path_to(id);
            log::debug!("dfs: reached {goal} after {explored} pops, path of {}", path.len());
            return SearchOutcome::found(path, explored);
        }

        for edge in pather.edges(pos) {
            if visited.insert(edge.to) {
                stack.push(tree.step(id, edge.to));
            }
        }
    }

    log::debug!("dfs: {goal} unreachable after {explored} pops");
    SearchOutcome::not_found(explored)
}
