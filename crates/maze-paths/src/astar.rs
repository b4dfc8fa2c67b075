use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use maze_core::Position;

use crate::node::{NodeId, SearchTree};
use crate::outcome::SearchOutcome;
use crate::traits::{Heuristic, Pather};

/// Open-set entry, ordered by `f` and then by push order.
///
/// This is the frontier ordering only; node identity (for the closed set and
/// best-cost map) is the position, tracked separately.
#[derive(Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    seq: u64,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the earliest push.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `goal` guided by `heuristic`.
///
/// The open set may hold stale duplicates of a position; they are skipped on
/// pop once the position is closed, and a neighbor is only re-pushed when its
/// tentative cost beats the best known one. Ties on `f` pop in push order
/// (FIFO). `explored` counts every pop, stale ones and the goal included.
///
/// With an admissible, consistent heuristic the first pop of `goal` yields a
/// minimum-cost path.
pub fn astar<P, H>(pather: &P, start: Position, goal: Position, heuristic: H) -> SearchOutcome
where
    P: Pather,
    H: Heuristic,
{
    let mut tree = SearchTree::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut best_g: HashMap<Position, u32> = HashMap::new();
    let mut seq: u64 = 0;

    let root = tree.root(start, heuristic.estimate(start, goal));
    best_g.insert(start, 0);
    open.push(OpenEntry {
        f: tree.get(root).f(),
        seq,
        node: root,
    });

    let mut explored = 0;
    while let Some(entry) = open.pop() {
        explored += 1;
        let current = *tree.get(entry.node);
        if closed.contains(&current.pos) {
            continue;
        }

        if current.pos == goal {
            let path = tree.path_to(entry.node);
            log::debug!(
                "astar: reached {goal} after {explored} pops, cost {}",
                current.g
            );
            return SearchOutcome::found(path, explored);
        }

        closed.insert(current.pos);

        for edge in pather.edges(current.pos) {
            if closed.contains(&edge.to) {
                continue;
            }
            let tentative_g = current.g + edge.weight;
            if best_g.get(&edge.to).is_some_and(|&g| tentative_g >= g) {
                continue;
            }
            best_g.insert(edge.to, tentative_g);

            let h = heuristic.estimate(edge.to, goal);
            let id = tree.child(entry.node, edge.to, tentative_g, h);
            seq += 1;
            open.push(OpenEntry {
                f: tentative_g + h,
                seq,
                node: id,
            });
        }
    }

    log::debug!("astar: {goal} unreachable after {explored} pops");
    SearchOutcome::not_found(explored)
}
