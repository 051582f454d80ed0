//! Node handles and per-node edge storage.
//!
//! A [`Node`] owns its outgoing-edge map behind its own lock, so edge
//! mutations on different nodes never contend with each other.

use super::Edge;
use crate::error::Error;
use crate::sync::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight attached to a directed edge. Sign and range are unconstrained.
pub type Weight = i64;

/// Stable handle identifying a node, assigned sequentially from 0.
///
/// Indices are never reused. A handle is only meaningful for the graph that
/// returned it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Creates a handle from a raw position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw position of this node in its graph.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeIndex> for usize {
    fn from(index: NodeIndex) -> Self {
        index.0
    }
}

impl TryFrom<i64> for NodeIndex {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .map(Self)
            .map_err(|_| Error::NegativeIndex(raw))
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One vertex: identity, payload, and its own lockable edge map.
///
/// `index` and `value` never change after construction; only `edges` does.
pub(crate) struct Node<V> {
    index: NodeIndex,
    value: V,
    /// Destination -> weight. At most one entry per destination.
    edges: RwLock<FxHashMap<NodeIndex, Weight>>,
}

impl<V> Node<V> {
    pub(crate) fn new(index: NodeIndex, value: V, edge_capacity: usize) -> Self {
        Self {
            index,
            value,
            edges: RwLock::new(FxHashMap::with_capacity_and_hasher(
                edge_capacity,
                Default::default(),
            )),
        }
    }

    pub(crate) fn index(&self) -> NodeIndex {
        self.index
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    /// Inserts or overwrites the edge to `end`, returning the replaced weight.
    pub(crate) fn add_edge(&self, end: NodeIndex, weight: Weight) -> Option<Weight> {
        self.edges.write().insert(end, weight)
    }

    /// Snapshot of destination indices, in map order.
    pub(crate) fn neighbors(&self) -> Vec<NodeIndex> {
        self.edges.read().keys().copied().collect()
    }

    pub(crate) fn weight(&self, end: NodeIndex) -> Option<Weight> {
        self.edges.read().get(&end).copied()
    }

    pub(crate) fn out_degree(&self) -> usize {
        self.edges.read().len()
    }

    /// Appends one [`Edge`] per map entry, all taken under a single read lock.
    pub(crate) fn collect_edges(&self, out: &mut Vec<Edge>) {
        let edges = self.edges.read();
        out.extend(
            edges
                .iter()
                .map(|(&end, &weight)| Edge::new(self.index, end, weight)),
        );
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("index", &self.index)
            .field("value", &self.value)
            .field("out_degree", &self.out_degree())
            .finish()
    }
}
