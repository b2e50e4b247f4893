//! Domain model types for the traveling salesman problem.
//!
//! Provides located points, a directed weighted graph whose vertices refer
//! to edges by handle, and tours as permutations of vertex indices.

mod graph;
mod point;
mod tour;

pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};
pub use point::{euclidean_distance, random_points, Point};
pub use tour::{is_permutation, tour_weight, Tour};
