//! Builds cached distances into a graph.
//!
//! [`complete_graph`] stores a Euclidean edge for every ordered pair of
//! vertices (plus a zero self-edge), and [`build_distance_matrix`] then
//! materializes those edges as a [`DistanceMatrix`].
//!
//! # Complexity
//!
//! O(n²) distance evaluations and edge upserts. Existing edges are indexed
//! once per build, so rebuilding an already complete graph costs the same.

use crate::models::{Graph, Vertex};

use super::DistanceMatrix;

/// Connects every pair of vertices with their Euclidean distance.
///
/// Each unordered pair is measured once and stored in both directions.
/// Existing edges between a pair are re-weighted rather than duplicated.
pub fn complete_graph(graph: &mut Graph) {
    let points: Vec<_> = graph.vertices().iter().map(Vertex::point).collect();
    let n = points.len();

    let mut weights = Vec::with_capacity(n * n);
    for (i, p) in points.iter().enumerate() {
        weights.push((i, i, 0.0));
        for (j, q) in points.iter().enumerate().skip(i + 1) {
            let d = p.distance_to(q);
            weights.push((i, j, d));
            weights.push((j, i, d));
        }
    }
    graph.connect_all(weights);

    log::debug!(
        "graph: completed vertices={} edges={}",
        graph.vertex_count(),
        graph.edge_count()
    );
}

/// Completes the graph and returns its dense distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::build_distance_matrix;
/// use u_tsp::solver::build_graph;
///
/// let mut graph = build_graph(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
/// let dm = build_distance_matrix(&mut graph);
///
/// assert_eq!(graph.edge_count(), 4); // two self-edges, two directions
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.get(1, 1), 0.0);
/// ```
pub fn build_distance_matrix(graph: &mut Graph) -> DistanceMatrix {
    complete_graph(graph);
    DistanceMatrix::from_graph(graph)
}
