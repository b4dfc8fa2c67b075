use std::collections::{HashSet, VecDeque};

use maze_core::Position;

use crate::node::SearchTree;
use crate::outcome::SearchOutcome;
use crate::traits::Pather;

/// Breadth-first search from `start` to `goal`.
///
/// Positions are marked visited when enqueued, so each is enqueued at most
/// once. The goal test happens on dequeue and `explored` counts dequeues up
/// to and including the goal. With unit weights the returned path is a
/// shortest one.
pub fn bfs<P: Pather>(pather: &P, start: Position, goal: Position) -> SearchOutcome {
    let mut tree = SearchTree::new();
    let mut visited: HashSet<Position> = HashSet::new();
    let mut queue = VecDeque::new();

    queue.push_back(tree.root(start, 0));
    visited.insert(start);

    let mut explored = 0;
    while let Some(id) = queue.pop_front() {
        explored += 1;
        let pos = tree.get(id).pos;

        if pos == goal {
            let path = tree.path_to(id);
            log::debug!("bfs: reached {goal} after {explored} dequeues, path of {}", path.len());
            return SearchOutcome::found(path, explored);
        }

        for edge in pather.edges(pos) {
            if visited.insert(edge.to) {
                queue.push_back(tree.step(id, edge.to));
            }
        }
    }

    log::debug!("bfs: {goal} unreachable after {explored} dequeues");
    SearchOutcome::not_found(explored)
}
