//! Edge reporting type.

use super::{NodeIndex, Weight};
use serde::{Deserialize, Serialize};

/// A directed, weighted edge as reported by [`Graph::edges`](super::Graph::edges).
///
/// Edges are not stored as entities; each one is materialized on demand from
/// the source node's edge map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source node.
    pub start: NodeIndex,
    /// Destination node.
    pub end: NodeIndex,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge record.
    #[must_use]
    pub const fn new(start: NodeIndex, end: NodeIndex, weight: Weight) -> Self {
        Self { start, end, weight }
    }

    /// Returns true if the edge starts and ends at the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}
