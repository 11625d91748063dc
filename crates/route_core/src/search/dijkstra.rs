//! Dijkstra's algorithm on an undirected [`Graph`].
//!
//! The frontier is a binary heap without decrease-key. Every successful
//! relaxation pushes a new entry and superseded entries stay in the heap
//! (lazy deletion). A popped entry whose distance is larger than the best
//! known distance of its node is stale and skipped. Each adjacency entry
//! relaxes at most once, so the frontier holds O(E) entries in the worst case,
//! not O(V).
//!
//! Among entries with equal distance the node with the lower [`NodeIndex`],
//! i.e. the one inserted into the graph first, is popped first. Together with
//! the strict `<` in the relaxation this makes the returned path deterministic
//! when several optimal paths exist.
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::{fmt, hash::Hash};

use log::{debug, info, trace};

use crate::constants::{Weight, INFINITY};
use crate::error::{self, RouteError};
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the smallest weight is at the top of the max heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

/// Point to point shortest path search.
///
/// Holds a shared borrow of the graph, so the graph cannot change while a
/// `Dijkstra` instance exists. Distance table, predecessor table and frontier
/// are allocated per [`Dijkstra::search`] call.
pub struct Dijkstra<'a, N> {
    pub stats: SearchStats,
    g: &'a Graph<N>,
}

impl<'a, N> Dijkstra<'a, N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new(graph: &'a Graph<N>) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Returns the minimum weight path from `source` to `target`.
    ///
    /// Edge weights must be non-negative, otherwise the result is undefined.
    pub fn search(&mut self, source: &N, target: &N) -> error::Result<ShortestPath<N>, N> {
        self.stats.init();
        let sp = self.run(source, target);
        self.stats.finish();

        match &sp {
            Ok(sp) => {
                debug!("Path found: {:?}", sp);
                info!(
                    "Path found: {:?}/{} nodes settled",
                    self.stats.duration, self.stats.nodes_settled
                );
            }
            Err(e) => {
                info!(
                    "No path found ({}): {:?}/{} nodes settled",
                    e, self.stats.duration, self.stats.nodes_settled
                );
            }
        }

        sp
    }

    fn run(&mut self, source: &N, target: &N) -> error::Result<ShortestPath<N>, N> {
        let source_idx = self.g.try_node_index(source)?;
        let target_idx = self.g.try_node_index(target)?;

        info!("BEGIN DIJKSTRA SEARCH from {:?} to {:?}", source, target);

        let mut distances = vec![INFINITY; self.g.num_nodes()];
        let mut predecessors: Vec<Option<NodeIndex>> = vec![None; self.g.num_nodes()];
        distances[source_idx.index()] = 0.0;

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source_idx, 0.0));
        self.stats.observe_frontier(queue.len());

        while let Some(Candidate { node_idx, weight }) = queue.pop() {
            if weight > distances[node_idx.index()] {
                self.stats.stale_entries += 1;
                continue;
            }
            self.stats.nodes_settled += 1;

            if node_idx == target_idx {
                break;
            }

            for (neighbor, edge_weight) in self.g.neighbors_of(node_idx) {
                let new_distance = weight + edge_weight;
                if new_distance < distances[neighbor.index()] {
                    trace!(
                        "Relax {:?}: {} -> {}",
                        neighbor,
                        distances[neighbor.index()],
                        new_distance
                    );
                    distances[neighbor.index()] = new_distance;
                    predecessors[neighbor.index()] = Some(node_idx);
                    queue.push(Candidate::new(neighbor, new_distance));
                    self.stats.edges_relaxed += 1;
                }
            }
            self.stats.observe_frontier(queue.len());
        }

        let weight = distances[target_idx.index()];
        if weight == INFINITY {
            return Err(RouteError::UnreachableTarget {
                from: source.clone(),
                to: target.clone(),
            });
        }

        let nodes = super::reconstruct_path(target_idx, &predecessors)
            .into_iter()
            .map(|node_idx| self.g[node_idx].clone())
            .collect();

        Ok(ShortestPath::new(nodes, weight))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use approx::relative_eq;
    use proptest::prelude::*;

    use crate::search::assert_path;
    use crate::util::test_graphs::{generate_complex_graph, medellin_sights, two_components};

    use super::*;

    /// Minimum weight over all simple paths, by exhaustive enumeration.
    fn brute_force<N>(g: &Graph<N>, source: &N, target: &N) -> Option<Weight>
    where
        N: Clone + Eq + Hash + fmt::Debug,
    {
        fn visit<N>(
            g: &Graph<N>,
            current: &N,
            target: &N,
            visited: &mut Vec<N>,
            acc: Weight,
            best: &mut Option<Weight>,
        ) where
            N: Clone + Eq + Hash + fmt::Debug,
        {
            if current == target {
                *best = Some(best.map_or(acc, |b| b.min(acc)));
                return;
            }
            for (neighbor, weight) in g.neighbors(current).unwrap() {
                if visited.contains(neighbor) {
                    continue;
                }
                visited.push(neighbor.clone());
                visit(g, neighbor, target, visited, acc + weight, best);
                visited.pop();
            }
        }

        let mut best = None;
        visit(g, source, target, &mut vec![source.clone()], 0.0, &mut best);
        best
    }

    #[test]
    fn medellin_sights_route() {
        let g = medellin_sights();
        let mut d = Dijkstra::new(&g);

        assert_path(
            vec![
                "Parque Explora",
                "Jardín Botánico",
                "Plaza Botero",
                "Museo de Antioquia",
            ],
            26.0,
            d.search(&"Parque Explora", &"Museo de Antioquia"),
        );
        assert_path(
            vec![
                "Museo de Antioquia",
                "Plaza Botero",
                "Jardín Botánico",
                "Parque Explora",
            ],
            26.0,
            d.search(&"Museo de Antioquia", &"Parque Explora"),
        );
        assert_path(
            vec![
                "Pueblito Paisa",
                "Museo de Antioquia",
                "Plaza Botero",
                "Jardín Botánico",
                "Parque de los Deseos",
            ],
            38.0,
            d.search(&"Pueblito Paisa", &"Parque de los Deseos"),
        );
    }

    #[test]
    fn simple_path() {
        //      7 -- 8 -- 9
        //      |         |
        // 0 -- 5 -- 6 -  |
        // |         |  \ |
        // 1 -- 2 -- 3 -- 4
        let g: Graph<u32> = [
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 20.0),
            (0, 5, 5.0),
            (5, 6, 1.0),
            (6, 4, 20.0),
            (6, 3, 20.0),
            (5, 7, 5.0),
            (7, 8, 1.0),
            (8, 9, 1.0),
            (9, 4, 1.0),
        ]
        .into_iter()
        .collect();

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 5, 7, 8, 9, 4], 13.0, d.search(&0, &4));
        assert_path(vec![4, 9, 8, 7, 5, 0], 13.0, d.search(&4, &0));
        assert_path(vec![6, 5, 0, 1, 2, 3], 9.0, d.search(&6, &3));
        assert_path(vec![4], 0.0, d.search(&4, &4));
        assert_path(vec![1, 0, 5, 7, 8, 9, 4], 14.0, d.search(&1, &4));
    }

    #[test]
    fn disconnected_graph() {
        // 0 -- 1 -- 2
        // 3 -- 4 -- 5
        let g = two_components();
        let mut d = Dijkstra::new(&g);

        assert_eq!(
            d.search(&0, &3),
            Err(RouteError::UnreachableTarget { from: 0, to: 3 })
        );
        assert_eq!(
            d.search(&5, &1),
            Err(RouteError::UnreachableTarget { from: 5, to: 1 })
        );
        assert_path(vec![0, 1, 2], 2.0, d.search(&0, &2));
        assert_path(vec![3, 4, 5], 4.0, d.search(&3, &5));
    }

    #[test]
    fn go_around() {
        // 0 -- 1
        // |    |
        // 2 -- 3
        let g: Graph<u32> = [(0, 1, 10.0), (0, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)]
            .into_iter()
            .collect();
        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 2, 3, 1], 3.0, d.search(&0, &1));
    }

    #[test]
    fn identity_path() {
        let g = medellin_sights();
        let mut d = Dijkstra::new(&g);

        for node in g.nodes() {
            assert_path(vec![*node], 0.0, d.search(node, node));
        }
    }

    #[test]
    fn unknown_nodes() {
        let g = medellin_sights();
        let mut d = Dijkstra::new(&g);

        assert_eq!(
            d.search(&"Estadio", &"Plaza Botero"),
            Err(RouteError::UnknownNode("Estadio"))
        );
        assert_eq!(
            d.search(&"Plaza Botero", &"Estadio"),
            Err(RouteError::UnknownNode("Estadio"))
        );
        assert_eq!(
            d.search(&"Estadio", &"Estadio"),
            Err(RouteError::UnknownNode("Estadio"))
        );
        // Source is checked first
        assert_eq!(
            d.search(&"Metrocable", &"Estadio"),
            Err(RouteError::UnknownNode("Metrocable"))
        );
    }

    #[test]
    fn cheaper_parallel_edge_wins() {
        let g: Graph<&str> = [("a", "b", 10.0), ("a", "b", 3.0), ("b", "a", 7.0)]
            .into_iter()
            .collect();

        assert_path(vec!["a", "b"], 3.0, Dijkstra::new(&g).search(&"a", &"b"));
    }

    #[test]
    fn zero_weight_edges() {
        let g: Graph<&str> = [("a", "b", 0.0), ("b", "c", 0.0), ("c", "a", 0.0)]
            .into_iter()
            .collect();

        assert_path(vec!["a", "c"], 0.0, Dijkstra::new(&g).search(&"a", &"c"));
    }

    #[test]
    fn stale_entries_are_skipped() {
        // s --10-- a --20-- t
        //  \      /
        //   1    1
        //    \  /
        //     b
        let g: Graph<&str> = [
            ("s", "a", 10.0),
            ("s", "b", 1.0),
            ("b", "a", 1.0),
            ("a", "t", 20.0),
        ]
        .into_iter()
        .collect();
        let mut d = Dijkstra::new(&g);

        assert_path(vec!["s", "b", "a", "t"], 22.0, d.search(&"s", &"t"));

        // a was pushed with 10 and again with 2, the first entry is popped
        // after the second one and skipped
        assert_eq!(d.stats.stale_entries, 1);
        assert_eq!(d.stats.nodes_settled, 4);
        assert_eq!(d.stats.edges_relaxed, 4);
    }

    #[test]
    fn equal_cost_ties_follow_insertion_order() {
        //   b
        //  / \
        // a   d
        //  \ /
        //   c
        let g: Graph<&str> = [
            ("a", "b", 1.0),
            ("a", "c", 1.0),
            ("b", "d", 1.0),
            ("c", "d", 1.0),
        ]
        .into_iter()
        .collect();
        assert_path(vec!["a", "b", "d"], 2.0, Dijkstra::new(&g).search(&"a", &"d"));

        let g: Graph<&str> = [
            ("a", "c", 1.0),
            ("c", "d", 1.0),
            ("a", "b", 1.0),
            ("b", "d", 1.0),
        ]
        .into_iter()
        .collect();
        assert_path(vec!["a", "c", "d"], 2.0, Dijkstra::new(&g).search(&"a", &"d"));
    }

    #[test]
    fn negative_weight_is_not_optimal() {
        // Violates the non-negative precondition. The search settles t before
        // it ever looks at the negative edge.
        let g: Graph<&str> = [("s", "t", 1.0), ("s", "x", 5.0), ("x", "t", -10.0)]
            .into_iter()
            .collect();

        assert_path(vec!["s", "t"], 1.0, Dijkstra::new(&g).search(&"s", &"t"));
        assert_eq!(brute_force(&g, &"s", &"t"), Some(-5.0));
    }

    #[test]
    fn complex_graph_matches_brute_force() {
        let g = generate_complex_graph();
        let mut d = Dijkstra::new(&g);

        for source in g.nodes() {
            for target in g.nodes() {
                let sp = d.search(source, target).unwrap();
                assert_eq!(Some(sp.weight), brute_force(&g, source, target));
                assert_eq!(sp.source(), Some(source));
                assert_eq!(sp.target(), Some(target));
            }
        }
    }

    #[test]
    fn concurrent_searches_share_graph() {
        let g = medellin_sights();

        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let mut d = Dijkstra::new(&g);
                    for _ in 0..100 {
                        let sp = d.search(&"Parque Explora", &"Museo de Antioquia").unwrap();
                        assert_eq!(sp.weight, 26.0);
                        assert_eq!(sp.nodes.len(), 4);
                    }
                });
            }
        });
    }

    proptest! {
        #[test]
        fn optimal_on_small_graphs(
            edges in prop::collection::vec((0u8..8, 0u8..8, 0u32..20), 1..16)
        ) {
            let g: Graph<u8> = edges
                .iter()
                .map(|&(a, b, w)| (a, b, w as Weight))
                .collect();
            let mut d = Dijkstra::new(&g);

            for source in g.nodes() {
                for target in g.nodes() {
                    match (d.search(source, target), brute_force(&g, source, target)) {
                        (Ok(sp), Some(best)) => {
                            prop_assert!(relative_eq!(sp.weight, best));
                            prop_assert_eq!(sp.source(), Some(source));
                            prop_assert_eq!(sp.target(), Some(target));

                            // The reported weight is realised by the cheapest
                            // edges between consecutive path nodes
                            let realised: Weight = sp
                                .nodes
                                .windows(2)
                                .map(|pair| {
                                    g.neighbors(&pair[0])
                                        .unwrap()
                                        .filter(|(n, _)| **n == pair[1])
                                        .map(|(_, w)| w)
                                        .fold(INFINITY, Weight::min)
                                })
                                .sum();
                            prop_assert!(relative_eq!(realised, sp.weight));
                        }
                        (Err(e), None) => {
                            prop_assert_eq!(
                                e,
                                RouteError::UnreachableTarget { from: *source, to: *target }
                            );
                        }
                        (found, expected) => {
                            prop_assert!(
                                false,
                                "search returned {:?}, brute force {:?}",
                                found,
                                expected
                            );
                        }
                    }
                }
            }
        }
    }
}
