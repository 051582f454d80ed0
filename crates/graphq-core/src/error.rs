//! Error types for `graphq`.
//!
//! The lenient graph API absorbs every invalid input as a no-op and reports it
//! through `tracing`. The `try_*` methods return these errors instead.
//! Error codes follow the pattern `GRAPHQ-XXX`.

use crate::graph::NodeIndex;
use thiserror::Error;

/// Result type alias for `graphq` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `graphq` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Node index outside the graph at the time of the check (GRAPHQ-001).
    #[error("[GRAPHQ-001] Node index {index} is out of range (graph has {len} nodes)")]
    InvalidIndex {
        /// The offending index.
        index: NodeIndex,
        /// Node count observed when the index was checked.
        len: usize,
    },

    /// Absent payload passed where a node value was required (GRAPHQ-002).
    #[error("[GRAPHQ-002] Node value is absent, no node created")]
    NilValue,

    /// An endpoint passed the range check but did not resolve to a node (GRAPHQ-003).
    ///
    /// Indicates broken internal state. Please report if encountered.
    #[error("[GRAPHQ-003] Edge endpoint did not resolve: {start} -> {end}")]
    DanglingEndpoint {
        /// Edge source.
        start: NodeIndex,
        /// Edge destination.
        end: NodeIndex,
    },

    /// Raw integer index below zero (GRAPHQ-004).
    #[error("[GRAPHQ-004] Node index {0} is negative")]
    NegativeIndex(i64),

    /// Configuration error (GRAPHQ-005).
    #[error("[GRAPHQ-005] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "GRAPHQ-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "GRAPHQ-001",
            Self::NilValue => "GRAPHQ-002",
            Self::DanglingEndpoint { .. } => "GRAPHQ-003",
            Self::NegativeIndex(_) => "GRAPHQ-004",
            Self::Config(_) => "GRAPHQ-005",
        }
    }

    /// Returns true if this error is recoverable.
    ///
    /// Every input error leaves the graph untouched; only a dangling endpoint
    /// signals that the graph itself is inconsistent.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::DanglingEndpoint { .. })
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
