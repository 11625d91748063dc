use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::Graph;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Frontier entries that were popped and expanded
    pub nodes_settled: usize,
    /// Successful relaxations, i.e. pushes onto the frontier
    pub edges_relaxed: usize,
    /// Superseded frontier entries that were popped and skipped
    pub stale_entries: usize,
    /// Largest frontier size observed, bounded by the number of edges
    pub max_frontier: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.stale_entries = 0;
        self.max_frontier = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.max_frontier = self.max_frontier.max(len);
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} edges relaxed, {} stale entries skipped in {:?}",
            self.nodes_settled, self.edges_relaxed, self.stale_entries, self.duration
        )
    }
}

/// Average number of adjacency entries per node
pub fn average_degree<N>(g: &Graph<N>) -> f64 {
    if g.is_empty() {
        return 0.0;
    }
    // Every edge appears in the adjacency of both endpoints
    2.0 * g.num_edges() as f64 / g.num_nodes() as f64
}
