use crate::constants::Weight;
use crate::error::{self, RouteError};
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::{fmt, hash::Hash, ops::Index};

/// Default integer typer for node and edge indices
/// Needs to be increased vor very large graphs > u32::max
pub type DefaultIdx = u32;

/// Dense node identifier, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// Undirected edge. `source` and `target` only record the order in which the
/// endpoints were passed to [`Graph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint opposite to `node`.
    #[inline]
    pub(crate) fn opposite(&self, node: NodeIndex) -> NodeIndex {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }
}

/// Undirected weighted graph over arbitrary hashable node identifiers.
///
/// Every inserted edge is visible from both endpoints, so the adjacency is
/// symmetric by construction. Parallel edges are kept as they are.
///
/// Edge weights must be non-negative. This is not enforced: a negative weight
/// is only logged, and shortest path results on such a graph are undefined.
///
/// The graph is `Sync` whenever `N` is, so any number of searches may borrow
/// it concurrently once it is fully built.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    node_indices: FxHashMap<N, NodeIndex>,
    edges: Vec<Edge>,
    edges_out: Vec<Vec<EdgeIndex>>,
}

impl<N> Graph<N> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_indices: FxHashMap::default(),
            edges: Vec::new(),
            edges_out: Vec::new(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            node_indices: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
            edges: Vec::with_capacity(num_edges),
            edges_out: Vec::with_capacity(num_nodes),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&N> {
        self.nodes.get(node_idx.index())
    }

    /// Returns an iterator over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges as `(a, b, weight)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> + '_ {
        self.edges.iter().map(move |edge| {
            (
                &self.nodes[edge.source.index()],
                &self.nodes[edge.target.index()],
                edge.weight,
            )
        })
    }

    /// Index based adjacency used by the search algorithms.
    ///
    /// **Panics** if `node_idx` does not belong to this graph.
    pub(crate) fn neighbors_of(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.edges_out[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            (edge.opposite(node_idx), edge.weight)
        })
    }
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Adds `node` if it is not part of the graph yet.
    ///
    /// **Panics** if the Graph is at the maximum number of nodes for its index
    /// type
    ///
    /// Returns the index of the (new or existing) node.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(node_idx) = self.node_indices.get(&node) {
            return *node_idx;
        }

        let node_idx = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());
        self.node_indices.insert(node.clone(), node_idx);
        self.nodes.push(node);

        node_idx
    }

    /// Adds an undirected edge between `a` and `b`, inserting both nodes if
    /// they are missing.
    ///
    /// **Panics** if the Graph is at the maximum number of edges for its index
    /// type
    ///
    /// Returns the index of the new created edge.
    pub fn add_edge(&mut self, a: N, b: N, weight: Weight) -> EdgeIndex {
        if weight.is_nan() || weight < 0.0 {
            warn!(
                "Edge {:?} <-> {:?} has invalid weight {}, shortest paths are undefined",
                a, b, weight
            );
        }

        let source = self.add_node(a);
        let target = self.add_node(b);
        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Both directions share the same edge
        self.edges_out[source.index()].push(edge_idx);
        self.edges_out[target.index()].push(edge_idx);
        self.edges.push(Edge::new(source, target, weight));

        edge_idx
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (N, N, Weight)>) {
        for (a, b, weight) in edges {
            self.add_edge(a, b, weight);
        }
        debug!(
            "Graph has {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
    }

    pub fn node_index(&self, node: &N) -> Option<NodeIndex> {
        self.node_indices.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.node_indices.contains_key(node)
    }

    /// Same as [`Graph::node_index`] but fails with [`RouteError::UnknownNode`].
    pub fn try_node_index(&self, node: &N) -> error::Result<NodeIndex, N> {
        self.node_index(node)
            .ok_or_else(|| RouteError::UnknownNode(node.clone()))
    }

    /// Returns the adjacency list of `node` as `(neighbor, weight)` pairs in
    /// insertion order. A self loop shows up twice.
    pub fn neighbors(
        &self,
        node: &N,
    ) -> error::Result<impl Iterator<Item = (&N, Weight)> + '_, N> {
        let node_idx = self.try_node_index(node)?;
        Ok(self
            .neighbors_of(node_idx)
            .map(move |(neighbor, weight)| (&self.nodes[neighbor.index()], weight)))
    }

    /// Number of adjacency entries of `node`
    pub fn degree(&self, node: &N) -> error::Result<usize, N> {
        let node_idx = self.try_node_index(node)?;
        Ok(self.edges_out[node_idx.index()].len())
    }
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> FromIterator<(N, N, Weight)> for Graph<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = (N, N, Weight)>>(iter: I) -> Self {
        let mut g = Graph::new();
        g.add_edges(iter);
        g
    }
}

impl<N> Extend<(N, N, Weight)> for Graph<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    fn extend<I: IntoIterator<Item = (N, N, Weight)>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}

impl<N> Index<NodeIndex> for Graph<N> {
    type Output = N;

    /// **Panics** if `node_idx` does not belong to this graph.
    fn index(&self, node_idx: NodeIndex) -> &N {
        &self.nodes[node_idx.index()]
    }
}

impl<N> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.nodes.len(),
            self.edges.len()
        )
    }
}
