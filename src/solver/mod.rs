//! Library boundary for solving a point set.
//!
//! A typical caller builds a graph from points, caches its distances, then
//! either solves in one call or drives a step-wise solver and draws each
//! [`Snapshot`]:
//!
//! ```
//! use u_tsp::models::Point;
//! use u_tsp::ga::GaConfig;
//! use u_tsp::solver::{
//!     build_distance_matrix, build_graph, run_genetic_algorithm, solve_nearest_neighbor,
//! };
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let mut graph = build_graph(&points);
//! let matrix = build_distance_matrix(&mut graph);
//!
//! let nn = solve_nearest_neighbor(&graph, &matrix).unwrap();
//! assert_eq!(nn.len(), 4);
//!
//! let config = GaConfig::default().with_population_size(10).with_generations(20).with_seed(1);
//! let ga = run_genetic_algorithm(&graph, &matrix, &config).unwrap();
//! assert_eq!(ga.best_order[0], graph.vertices()[0].id());
//! ```

mod options;
mod pacing;
mod state;

pub use options::DisplayOptions;
pub use pacing::{paced, Paced};
pub use state::{Snapshot, SolverState};

pub use crate::distance::build_distance_matrix;

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::ga::{GaConfig, GeneticSolver};
use crate::models::{Graph, Point, VertexId};

/// Best tour of a GA run, resolved to graph vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct GaSolution {
    /// Vertices in visiting order.
    pub best_order: Vec<VertexId>,
    /// Open-path length of `best_order`.
    pub best_weight: f64,
}

/// Builds a graph with one vertex per point, named by its index.
pub fn build_graph(points: &[Point]) -> Graph {
    let mut graph = Graph::new();
    for (i, p) in points.iter().enumerate() {
        graph.add_vertex(i.to_string(), *p);
    }
    graph
}

/// Solves with the nearest-neighbor heuristic starting at the first vertex.
pub fn solve_nearest_neighbor(graph: &Graph, matrix: &DistanceMatrix) -> Result<Vec<VertexId>> {
    ensure_matches(graph, matrix)?;
    Ok(nearest_neighbor(matrix).vertex_ids(graph))
}

/// Runs the genetic algorithm and returns its retained best tour.
pub fn run_genetic_algorithm(
    graph: &Graph,
    matrix: &DistanceMatrix,
    config: &GaConfig,
) -> Result<GaSolution> {
    ensure_matches(graph, matrix)?;
    let result = GeneticSolver::new(matrix, config.clone())?.run();
    Ok(GaSolution {
        best_order: result.best.vertex_ids(graph),
        best_weight: result.best_weight,
    })
}

fn ensure_matches(graph: &Graph, matrix: &DistanceMatrix) -> Result<()> {
    if graph.vertex_count() != matrix.size() {
        return Err(TspError::MatrixMismatch {
            matrix: matrix.size(),
            vertices: graph.vertex_count(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_build_graph_names_by_index() {
        let graph = build_graph(&square());
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        for (i, v) in graph.vertices().iter().enumerate() {
            assert_eq!(v.name(), i.to_string());
            assert_eq!(v.index(), i);
        }
        assert_eq!(graph.vertex_by_name("2").map(|v| v.point()), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_solve_nearest_neighbor_square() {
        let mut graph = build_graph(&square());
        let matrix = build_distance_matrix(&mut graph);
        let order = solve_nearest_neighbor(&graph, &matrix).expect("sizes match");
        let names: Vec<&str> = order
            .iter()
            .filter_map(|&id| graph.vertex(id).map(|v| v.name()))
            .collect();
        assert_eq!(names, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn test_mismatch_rejected() {
        let mut graph = build_graph(&square());
        let matrix = build_distance_matrix(&mut graph);
        graph.add_vertex("4", Point::new(5.0, 5.0));
        assert_eq!(
            solve_nearest_neighbor(&graph, &matrix),
            Err(TspError::MatrixMismatch {
                matrix: 4,
                vertices: 5
            })
        );
        assert!(run_genetic_algorithm(&graph, &matrix, &GaConfig::default()).is_err());
    }

    #[test]
    fn test_run_genetic_algorithm_square() {
        let mut graph = build_graph(&square());
        let matrix = build_distance_matrix(&mut graph);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(50)
            .with_mutation_rate(0.2)
            .with_seed(5);
        let solution = run_genetic_algorithm(&graph, &matrix, &config).expect("valid");
        assert_eq!(solution.best_order.len(), 4);
        // Optimal open path around the square.
        assert!((solution.best_weight - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_run_genetic_algorithm_invalid_config() {
        let mut graph = build_graph(&square());
        let matrix = build_distance_matrix(&mut graph);
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            run_genetic_algorithm(&graph, &matrix, &config),
            Err(TspError::InvalidConfig(_))
        ));
    }
}
