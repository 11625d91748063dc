use thiserror::Error;

/// Errors returned by graph lookups and shortest path queries.
///
/// `N` is the node identifier type of the queried [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError<N> {
    /// The node was never added to the graph
    #[error("unknown node {0:?}")]
    UnknownNode(N),
    /// Both nodes exist but no path connects them
    #[error("no route from {from:?} to {to:?}")]
    UnreachableTarget { from: N, to: N },
}

pub type Result<T, N> = std::result::Result<T, RouteError<N>>;
