//! Concurrent node arena with two-tier locking.
//!
//! # Lock tiers
//!
//! - **Structural lock** (`Graph::nodes`): guards length and append of the
//!   node vector. Index validity checks and index-to-node lookups take it in
//!   read mode; `add_node` takes it in write mode.
//! - **Per-node lock** (`Node::edges`): guards one node's outgoing-edge map.
//!
//! The structural lock is always released before a per-node lock is taken
//! (lookups clone the node's `Arc` out), so no thread ever holds two locks.

use super::node::Node;
use super::{Edge, GraphStats, NodeIndex, TraversalConfig, Weight, LOG_TARGET};
use crate::config::{GraphSettings, GraphqConfig};
use crate::error::{Error, Result};
use crate::sync::{Arc, RwLock};
use std::fmt;
use tracing::{debug, trace, warn};

/// An in-memory weighted directed graph safe for concurrent use.
///
/// Every method takes `&self`; share the graph across threads with an `Arc`.
/// Nodes are never removed, so a [`NodeIndex`] stays valid once issued.
///
/// # Example
///
/// ```rust
/// use graphq_core::Graph;
///
/// let graph = Graph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// graph.add_edge(a, b, 3);
///
/// assert_eq!(graph.neighbors(a), vec![b]);
/// assert!(graph.neighbors(b).is_empty());
/// ```
pub struct Graph<V> {
    nodes: RwLock<Vec<Arc<Node<V>>>>,
    /// Initial capacity of each new node's edge map.
    edge_map_capacity: usize,
    /// Bounds applied by `bfs`, `try_bfs` and `bfs_iter`.
    traversal: TraversalConfig,
}

impl<V> Graph<V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: RwLock::new(Vec::with_capacity(capacity)),
            edge_map_capacity: 0,
            traversal: TraversalConfig::default(),
        }
    }

    /// Creates an empty graph sized from configuration.
    #[must_use]
    pub fn with_config(settings: &GraphSettings) -> Self {
        Self {
            nodes: RwLock::new(Vec::with_capacity(settings.initial_node_capacity)),
            edge_map_capacity: settings.edge_map_capacity,
            traversal: TraversalConfig::default(),
        }
    }

    /// Creates an empty graph from a loaded configuration.
    ///
    /// The `[traversal]` section becomes the graph's default traversal
    /// bounds (see [`Graph::traversal_defaults`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration fails validation.
    pub fn from_config(config: &GraphqConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(&config.graph).with_traversal_defaults(config.into()))
    }

    /// Replaces the bounds used by the traversals that take no explicit
    /// [`TraversalConfig`].
    #[must_use]
    pub fn with_traversal_defaults(mut self, traversal: TraversalConfig) -> Self {
        self.traversal = traversal;
        self
    }

    /// Bounds used by [`Graph::bfs`], [`Graph::try_bfs`] and [`Graph::bfs_iter`].
    /// Unbounded unless set from configuration.
    pub fn traversal_defaults(&self) -> TraversalConfig {
        self.traversal
    }

    // ------------------------------------------------------------------
    // Growth
    // ------------------------------------------------------------------

    /// Appends a node holding `value` and returns its index.
    ///
    /// The index is allocated and the node appended in one critical section,
    /// so concurrent callers always receive distinct, dense indices.
    pub fn add_node(&self, value: V) -> NodeIndex {
        let mut nodes = self.nodes.write();
        let index = NodeIndex::new(nodes.len());
        nodes.push(Arc::new(Node::new(index, value, self.edge_map_capacity)));
        drop(nodes);

        trace!(target: LOG_TARGET, %index, "node added");
        index
    }

    /// Appends a node unless `value` is `None`.
    ///
    /// `None` is skipped silently: no node is created and index 0 is returned,
    /// which callers must not rely on. Use [`Graph::try_add_node`] to detect it.
    pub fn add_node_opt(&self, value: Option<V>) -> NodeIndex {
        match value {
            Some(value) => self.add_node(value),
            None => {
                debug!(target: LOG_TARGET, "absent node value, no node created");
                NodeIndex::default()
            }
        }
    }

    /// Appends a node, or fails with [`Error::NilValue`] if `value` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NilValue`] when no value is given.
    pub fn try_add_node(&self, value: Option<V>) -> Result<NodeIndex> {
        value.map(|value| self.add_node(value)).ok_or(Error::NilValue)
    }

    /// Adds or overwrites the directed edge `start -> end`.
    ///
    /// If either endpoint is out of range the call does nothing and a warning
    /// is emitted through `tracing`.
    pub fn add_edge(&self, start: NodeIndex, end: NodeIndex, weight: Weight) {
        if let Err(err) = self.try_add_edge(start, end, weight) {
            warn!(target: LOG_TARGET, %start, %end, error = %err, "edge skipped");
        }
    }

    /// Like [`Graph::add_edge`] but takes raw integers; negative indices are
    /// ignored without a diagnostic.
    pub fn add_edge_raw(&self, start: i64, end: i64, weight: Weight) {
        let (Ok(start), Ok(end)) = (NodeIndex::try_from(start), NodeIndex::try_from(end)) else {
            return;
        };
        self.add_edge(start, end, weight);
    }

    /// Adds or overwrites the directed edge `start -> end`.
    ///
    /// Returns the previous weight if the edge already existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if either endpoint is out of range. Both
    /// endpoints are checked against the same length snapshot.
    pub fn try_add_edge(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        weight: Weight,
    ) -> Result<Option<Weight>> {
        let source = self.resolve_endpoints(start, end)?;
        let previous = source.add_edge(end, weight);

        trace!(
            target: LOG_TARGET,
            %start,
            %end,
            weight,
            overwritten = previous.is_some(),
            "edge added"
        );
        Ok(previous)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Destination indices of the edges leaving `idx`, in unspecified order.
    ///
    /// Empty if `idx` is out of range.
    #[must_use]
    pub fn neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.try_neighbors(idx).unwrap_or_default()
    }

    /// Destination indices of the edges leaving `idx`, in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `idx` is out of range.
    pub fn try_neighbors(&self, idx: NodeIndex) -> Result<Vec<NodeIndex>> {
        Ok(self.resolve(idx)?.neighbors())
    }

    /// Every edge in the graph, in unspecified order.
    ///
    /// Each node's edges are read under that node's lock, but different nodes
    /// are read at different instants: edges added concurrently may or may not
    /// appear. Never reports two entries for the same `(start, end)` pair.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for node in &self.snapshot() {
            node.collect_edges(&mut edges);
        }
        edges
    }

    /// Weight of the edge `start -> end`, if present.
    #[must_use]
    pub fn weight(&self, start: NodeIndex, end: NodeIndex) -> Option<Weight> {
        self.resolve(start).ok()?.weight(end)
    }

    /// Clone of the value stored at `idx`.
    #[must_use]
    pub fn value(&self, idx: NodeIndex) -> Option<V>
    where
        V: Clone,
    {
        self.with_value(idx, V::clone)
    }

    /// Runs `f` against the value stored at `idx` without cloning it.
    pub fn with_value<R>(&self, idx: NodeIndex, f: impl FnOnce(&V) -> R) -> Option<R> {
        let node = self.resolve(idx).ok()?;
        Some(f(node.value()))
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    /// Returns true if no node has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `idx` refers to a node right now.
    #[must_use]
    pub fn contains(&self, idx: NodeIndex) -> bool {
        idx.index() < self.len()
    }

    /// Indices of every node present when called.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.len()).map(NodeIndex::new)
    }

    /// Total number of edges. Best-effort under concurrent mutation.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.snapshot().iter().map(|node| node.out_degree()).sum()
    }

    /// Point-in-time counters for the whole graph.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let nodes = self.snapshot();
        let mut stats = GraphStats {
            node_count: nodes.len(),
            ..GraphStats::default()
        };
        for node in &nodes {
            let degree = node.out_degree();
            stats.edge_count += degree;
            stats.max_out_degree = stats.max_out_degree.max(degree);
            if degree == 0 {
                stats.sink_count += 1;
            }
        }
        stats
    }

    // ------------------------------------------------------------------
    // Structural-lock helpers
    // ------------------------------------------------------------------

    /// Looks up `idx` under the structural read lock and hands back the node.
    fn resolve(&self, idx: NodeIndex) -> Result<Arc<Node<V>>> {
        let nodes = self.nodes.read();
        nodes.get(idx.index()).cloned().ok_or(Error::InvalidIndex {
            index: idx,
            len: nodes.len(),
        })
    }

    /// Checks both endpoints against one length snapshot and returns `start`.
    fn resolve_endpoints(&self, start: NodeIndex, end: NodeIndex) -> Result<Arc<Node<V>>> {
        let nodes = self.nodes.read();
        let len = nodes.len();
        for index in [start, end] {
            if index.index() >= len {
                return Err(Error::InvalidIndex { index, len });
            }
        }
        let source = nodes
            .get(start.index())
            .cloned()
            .ok_or(Error::DanglingEndpoint { start, end })?;
        debug_assert_eq!(source.index(), start);
        Ok(source)
    }

    /// Copies the node list so per-node locks can be taken without holding
    /// the structural lock.
    fn snapshot(&self) -> Vec<Arc<Node<V>>> {
        self.nodes.read().clone()
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.len())
            .field("edge_map_capacity", &self.edge_map_capacity)
            .field("traversal", &self.traversal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
impl<V> Graph<V> {
    /// Verifies `nodes[i].index == i` for every slot.
    pub(crate) fn indices_consistent(&self) -> bool {
        self.nodes
            .read()
            .iter()
            .enumerate()
            .all(|(i, node)| node.index().index() == i)
    }
}

// Compile-time check: Graph must be Send + Sync for Send + Sync payloads
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph<u64>>();
    assert_send_sync::<Graph<String>>();
};
