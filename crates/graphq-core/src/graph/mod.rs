//! Concurrent weighted directed graph.
//!
//! Nodes live in an append-only arena addressed by [`NodeIndex`]; each node
//! carries its own lock around its outgoing-edge map.
//!
//! # Features
//!
//! - **Two-tier locking**: one structural lock for the node vector, one lock
//!   per node for its edges
//! - **Dense, stable indices**: the k-th added node gets index k, forever
//! - **Lenient and strict APIs**: invalid input is either a logged no-op or a
//!   [`crate::Error`]
//! - **BFS**: callback, bounded, layered and lazy-iterator forms
//!
//! # Example
//!
//! ```rust
//! use graphq_core::graph::{Graph, TraversalConfig};
//!
//! let graph = Graph::new();
//! let nodes: Vec<_> = (0..4).map(|i| graph.add_node(i)).collect();
//! graph.add_edge(nodes[0], nodes[1], 1);
//! graph.add_edge(nodes[1], nodes[2], 1);
//! graph.add_edge(nodes[2], nodes[3], 1);
//!
//! let mut seen = Vec::new();
//! graph.bfs_with_config(nodes[0], &TraversalConfig::default().with_max_depth(2), |idx| {
//!     seen.push(idx);
//! });
//! assert_eq!(seen, &nodes[..3]);
//! ```

mod edge;
mod node;
mod queue;
mod stats;
mod store;
mod traversal;


pub use edge::Edge;
pub use node::{NodeIndex, Weight};
pub use queue::{FifoQueue, Frontier};
pub use stats::GraphStats;
pub use store::Graph;
pub use traversal::{BfsIter, TraversalConfig, Visit};

/// `tracing` target shared by every graph event.
pub(crate) const LOG_TARGET: &str = "graphq_core::graph";
