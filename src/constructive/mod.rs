//! Constructive heuristics for building a tour from scratch.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor path, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, NearestNeighbor};
