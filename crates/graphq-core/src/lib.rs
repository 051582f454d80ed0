//! # `graphq` Core
//!
//! In-memory weighted directed graph that many threads can grow and traverse
//! at once.
//!
//! ## Features
//!
//! - **Fine-grained locking**: a structural lock for the node list and one
//!   lock per node for its outgoing edges; no global lock on the edge path
//! - **Stable handles**: nodes are addressed by dense [`NodeIndex`] values
//!   and never removed
//! - **Never corrupts**: invalid indices and absent values are logged no-ops,
//!   or [`Error`]s through the `try_*` methods
//! - **Breadth-first traversal**: best-effort under concurrent mutation,
//!   always terminating
//!
//! ## Quick Start
//!
//! ```rust
//! use graphq_core::{Graph, NodeIndex};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let graph = Arc::new(Graph::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let graph = Arc::clone(&graph);
//!         thread::spawn(move || graph.add_node(i))
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! graph.add_edge(NodeIndex::new(0), NodeIndex::new(1), 5);
//! assert_eq!(graph.len(), 4);
//! assert_eq!(graph.edges().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // avg_out_degree reports f64
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;
pub mod sync;
pub mod telemetry;

pub use config::{ConfigError, GraphSettings, GraphqConfig, LoggingConfig};
pub use error::{Error, Result};
pub use graph::{
    BfsIter, Edge, FifoQueue, Frontier, Graph, GraphStats, NodeIndex, TraversalConfig, Visit,
    Weight,
};
