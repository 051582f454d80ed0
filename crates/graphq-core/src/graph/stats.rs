//! Point-in-time graph counters.

use serde::{Deserialize, Serialize};

/// Counters returned by [`Graph::stats`](super::Graph::stats).
///
/// Gathered node by node, so under concurrent mutation the figures are a
/// best-effort union rather than one atomic snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Largest out-degree of any node.
    pub max_out_degree: usize,
    /// Nodes with no outgoing edge.
    pub sink_count: usize,
}

impl GraphStats {
    /// Average out-degree, 0.0 for an empty graph.
    #[must_use]
    pub fn avg_out_degree(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.edge_count as f64 / self.node_count as f64
        }
    }
}
