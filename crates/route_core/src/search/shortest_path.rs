use std::fmt;

use crate::constants::Weight;

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath<N> {
    /// Nodes from source to target, both inclusive
    pub nodes: Vec<N>,
    pub weight: Weight,
}

impl<N> ShortestPath<N> {
    pub fn new(nodes: Vec<N>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl<N: fmt::Display> fmt::Display for ShortestPath<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, " (total {})", self.weight)
    }
}
