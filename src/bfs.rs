//! This module implements a breadth-first counterpart of
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
//! Visited nodes live in an insertion-ordered map so that the frontier and the predecessor links
//! can both refer to nodes by index.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::debug;
use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Predecessor index of the start node, which has no real predecessor.
const NO_PARENT: usize = usize::MAX;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, &parent)| {
            i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Searches from `start` in first-in-first-out order until `success` holds for a dequeued node.
/// Returns the nodes from `start` up to and including that node, or [None] if the frontier
/// runs empty first. Successors are expanded in the order they are yielded, which decides the
/// result among several equally short paths.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), NO_PARENT);
    while let Some(index) = frontier.pop_front() {
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                break;
            };
            if success(node) {
                debug!("Goal found after visiting {} nodes", parents.len());
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                frontier.push_back(e.index());
                e.insert(index);
            }
        }
    }
    debug!("Frontier exhausted after visiting {} nodes", parents.len());
    None
}
