//! # u-tsp
//!
//! Traveling salesman approximation over planar point sets: a graph model
//! with cached Euclidean distances, a greedy nearest-neighbor solver, and a
//! genetic algorithm with roulette selection and neighbor-swap mutation.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Graph, Vertex, Edge, Tour)
//! - [`distance`] — Dense distance matrix and its graph-backed builder
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`ga`] — Genetic algorithm with elitism over pinned-start tours
//! - [`solver`] — Boundary functions, solver lifecycle, display options and pacing
//!
//! Both solvers are step-wise iterators yielding a [`solver::Snapshot`] per
//! step, so a front end can pull progress at its own rate.

pub mod constructive;
pub mod distance;
mod error;
pub mod ga;
pub mod models;
pub mod solver;

pub use error::{Result, TspError};
pub use solver::{
    build_distance_matrix, build_graph, run_genetic_algorithm, solve_nearest_neighbor, GaSolution,
};
