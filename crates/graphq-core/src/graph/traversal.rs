//! Breadth-first traversal.
//!
//! Traversal holds no lock across the walk. It is a sequence of independent
//! [`Graph::neighbors`] snapshots, so edges and nodes added while a traversal
//! is in flight may or may not be observed.
//!
//! The visited set is sized to the node count when the traversal starts.
//! Neighbors at or beyond that count are ignored, which bounds the walk even
//! while the graph keeps growing.

use super::queue::{FifoQueue, Frontier};
use super::{Graph, NodeIndex, LOG_TARGET};
use crate::config::GraphqConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Limits applied to a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Deepest BFS layer to visit (root is layer 0). `None` = unbounded.
    pub max_depth: Option<u32>,
    /// Maximum number of nodes to visit. `None` = unbounded.
    pub limit: Option<usize>,
}

impl TraversalConfig {
    /// Config with no depth or count limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Sets the deepest layer to visit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the maximum number of visited nodes.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn expands(&self, depth: u32) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }

    fn exhausted(&self, visited: usize) -> bool {
        self.limit.is_some_and(|limit| visited >= limit)
    }
}

impl From<&GraphqConfig> for TraversalConfig {
    fn from(config: &GraphqConfig) -> Self {
        config.traversal
    }
}

/// A node reached by traversal together with its BFS layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visit {
    /// The node reached.
    pub index: NodeIndex,
    /// Hop distance from the root.
    pub depth: u32,
}

impl Visit {
    fn root(index: NodeIndex) -> Self {
        Self { index, depth: 0 }
    }

    fn child(self, index: NodeIndex) -> Self {
        Self {
            index,
            depth: self.depth + 1,
        }
    }
}

/// Marks `index` visited; false if already seen or outside the snapshot.
fn mark(visited: &mut [bool], index: NodeIndex) -> bool {
    match visited.get_mut(index.index()) {
        Some(seen) if !*seen => {
            *seen = true;
            true
        }
        _ => false,
    }
}

impl<V> Graph<V> {
    /// Visits every node reachable from `root` exactly once, in BFS order.
    ///
    /// Bounded by [`Graph::traversal_defaults`], which is unbounded unless the
    /// graph was built from configuration. Sibling order within a layer is
    /// unspecified. An out-of-range root visits nothing. `visit` must not
    /// mutate this graph.
    pub fn bfs<F>(&self, root: NodeIndex, visit: F)
    where
        F: FnMut(NodeIndex),
    {
        self.bfs_with_config(root, &self.traversal_defaults(), visit);
    }

    /// [`Graph::bfs`] bounded by `config`.
    pub fn bfs_with_config<F>(&self, root: NodeIndex, config: &TraversalConfig, visit: F)
    where
        F: FnMut(NodeIndex),
    {
        if let Err(err) = self.traverse(root, config, FifoQueue::new(), visit) {
            debug!(target: LOG_TARGET, %root, error = %err, "traversal skipped");
        }
    }

    /// [`Graph::bfs`] driven by a caller-chosen frontier implementation.
    pub fn bfs_with_queue<Q, F>(&self, root: NodeIndex, visit: F)
    where
        Q: Frontier<Visit> + Default,
        F: FnMut(NodeIndex),
    {
        if let Err(err) = self.traverse(root, &self.traversal_defaults(), Q::default(), visit) {
            debug!(target: LOG_TARGET, %root, error = %err, "traversal skipped");
        }
    }

    /// Strict [`Graph::bfs`]: returns the number of visited nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `root` is out of range.
    pub fn try_bfs<F>(&self, root: NodeIndex, visit: F) -> Result<usize>
    where
        F: FnMut(NodeIndex),
    {
        self.traverse(root, &self.traversal_defaults(), FifoQueue::new(), visit)
    }

    /// Lazy BFS yielding each reached node with its layer.
    ///
    /// Bounded by [`Graph::traversal_defaults`]. Empty if `root` is out of
    /// range.
    #[must_use]
    pub fn bfs_iter(&self, root: NodeIndex) -> BfsIter<'_, V> {
        self.bfs_iter_with_config(root, self.traversal_defaults())
    }

    /// [`Graph::bfs_iter`] bounded by `config`.
    #[must_use]
    pub fn bfs_iter_with_config(&self, root: NodeIndex, config: TraversalConfig) -> BfsIter<'_, V> {
        BfsIter::new(self, root, config)
    }

    /// Nodes reachable from `root`, grouped by BFS layer.
    ///
    /// Bounded like [`Graph::bfs_iter`].
    /// `layers(root)[0] == [root]` for a valid root; empty otherwise. Order
    /// inside a layer is unspecified.
    #[must_use]
    pub fn layers(&self, root: NodeIndex) -> Vec<Vec<NodeIndex>> {
        let mut layers: Vec<Vec<NodeIndex>> = Vec::new();
        for visit in self.bfs_iter(root) {
            let depth = visit.depth as usize;
            if layers.len() <= depth {
                layers.resize_with(depth + 1, Vec::new);
            }
            layers[depth].push(visit.index);
        }
        layers
    }

    fn traverse<Q, F>(
        &self,
        root: NodeIndex,
        config: &TraversalConfig,
        mut queue: Q,
        mut visit: F,
    ) -> Result<usize>
    where
        Q: Frontier<Visit>,
        F: FnMut(NodeIndex),
    {
        let len = self.len();
        let mut visited = vec![false; len];
        if !mark(&mut visited, root) {
            return Err(Error::InvalidIndex { index: root, len });
        }
        queue.enqueue(Visit::root(root));

        let mut count = 0;
        while let Some(current) = queue.dequeue() {
            if config.exhausted(count) {
                break;
            }
            visit(current.index);
            count += 1;

            if !config.expands(current.depth) {
                continue;
            }
            for neighbor in self.neighbors(current.index) {
                if mark(&mut visited, neighbor) {
                    queue.enqueue(current.child(neighbor));
                }
            }
        }
        Ok(count)
    }
}

/// Streaming BFS iterator returned by [`Graph::bfs_iter`].
///
/// A node's neighbors are fetched when the node is yielded, so each
/// `next()` takes at most one per-node read lock.
pub struct BfsIter<'a, V> {
    graph: &'a Graph<V>,
    queue: FifoQueue<Visit>,
    visited: Vec<bool>,
    config: TraversalConfig,
    yielded: usize,
}

impl<'a, V> BfsIter<'a, V> {
    fn new(graph: &'a Graph<V>, root: NodeIndex, config: TraversalConfig) -> Self {
        let mut visited = vec![false; graph.len()];
        let mut queue = FifoQueue::new();
        if mark(&mut visited, root) {
            queue.enqueue(Visit::root(root));
        } else {
            debug!(target: LOG_TARGET, %root, "traversal root out of range");
        }

        Self {
            graph,
            queue,
            visited,
            config,
            yielded: 0,
        }
    }

    /// Number of nodes yielded so far.
    #[must_use]
    pub fn yielded_count(&self) -> usize {
        self.yielded
    }
}

impl<V> Iterator for BfsIter<'_, V> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.config.exhausted(self.yielded) {
            return None;
        }
        let current = self.queue.dequeue()?;

        if self.config.expands(current.depth) {
            for neighbor in self.graph.neighbors(current.index) {
                if mark(&mut self.visited, neighbor) {
                    self.queue.enqueue(current.child(neighbor));
                }
            }
        }

        self.yielded += 1;
        Some(current)
    }
}
