use std::{fmt, hash::Hash};

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};

use self::dijkstra::Dijkstra;
use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Computes the shortest path from `source` to `target` with a fresh
/// [`Dijkstra`] instance.
///
/// Fails with [`RouteError::UnknownNode`](crate::error::RouteError::UnknownNode)
/// if either node is missing and with
/// [`RouteError::UnreachableTarget`](crate::error::RouteError::UnreachableTarget)
/// if no path connects them.
pub fn shortest_path<N>(graph: &Graph<N>, source: &N, target: &N) -> Result<ShortestPath<N>, N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    Dijkstra::new(graph).search(source, target)
}

/// Follows the predecessor chain from `target` back to the node without a
/// predecessor and returns the nodes in forward order.
pub(crate) fn reconstruct_path(
    target: NodeIndex,
    predecessors: &[Option<NodeIndex>],
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;

    while let Some(prev_node) = predecessors[current.index()] {
        path.push(prev_node);
        current = prev_node;
    }
    path.reverse();
    path
}

#[cfg(test)]
pub(crate) fn assert_path<N: fmt::Debug + PartialEq>(
    expected_path: Vec<N>,
    expected_weight: crate::constants::Weight,
    path: Result<ShortestPath<N>, N>,
) {
    assert_eq!(Ok(ShortestPath::new(expected_path, expected_weight)), path);
}
