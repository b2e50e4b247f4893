//! Distance matrices.
//!
//! Provides a dense distance matrix and the builder that caches Euclidean
//! distances as graph edges before materializing them.

mod builder;
mod matrix;

pub use builder::{build_distance_matrix, complete_graph};
pub use matrix::DistanceMatrix;
