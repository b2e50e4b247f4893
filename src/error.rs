//! Error types for TSP operations.
//!
//! Structural problems (unknown vertices, malformed tours, bad configuration)
//! are returned as [`TspError`]. Numerical edge cases inside the GA
//! (all tours equally long, roulette walk running past the end) are
//! recovered in place and never surface here.

use thiserror::Error;

use crate::models::EdgeId;

/// Result type alias for TSP operations.
pub type Result<T> = std::result::Result<T, TspError>;

/// Unified error type for graph, tour and solver operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A tour or population violates its structural invariants.
    #[error("invalid tour operation: {0}")]
    InvalidTourOperation(String),

    /// A referenced vertex is not part of the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// A referenced edge is not part of the graph.
    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// The distance matrix was built for a different vertex set.
    #[error("distance matrix has {matrix} rows but graph has {vertices} vertices")]
    MatrixMismatch {
        /// Matrix dimension.
        matrix: usize,
        /// Number of vertices in the graph.
        vertices: usize,
    },

    /// A solver configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
