//! Nearest-neighbor constructive heuristic.
//!
//! Builds one tour greedily: starting from vertex 0, always move to the
//! nearest unvisited vertex. Ties go to the lowest-positioned candidate in
//! the remaining list.
//!
//! # Complexity
//!
//! O(n²) where n = number of vertices.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. While tour quality
//! is typically around 25% above optimal, it provides a fast baseline.

use std::iter::FusedIterator;

use crate::distance::DistanceMatrix;
use crate::models::Tour;
use crate::solver::{Snapshot, SolverState};

/// Step-wise nearest-neighbor solver.
///
/// Each call to [`step`](Self::step) (or `next()`) appends one vertex, so a
/// set of `n` vertices takes exactly `n - 1` steps. Once solved, further
/// steps yield nothing and [`solve`](Self::solve) returns the cached tour.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::NearestNeighbor;
/// use u_tsp::solver::SolverState;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(1.0, 0.0),
/// ]);
/// let mut nn = NearestNeighbor::new(&dm);
///
/// let first = nn.next().unwrap();
/// assert_eq!(first.order, vec![0, 2]);
/// assert_eq!(nn.state(), SolverState::Solving);
///
/// assert_eq!(nn.solve().order(), &[0, 2, 1]);
/// assert_eq!(nn.state(), SolverState::Solved);
/// assert!(nn.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighbor<'a> {
    distances: &'a DistanceMatrix,
    remaining: Vec<usize>,
    path: Vec<usize>,
    weight: f64,
    state: SolverState,
    solved: Option<Tour>,
}

impl<'a> NearestNeighbor<'a> {
    /// Creates a solver over all vertices of the matrix, starting at vertex 0.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        let mut remaining: Vec<usize> = (0..distances.size()).collect();
        let mut path = Vec::with_capacity(remaining.len());
        if !remaining.is_empty() {
            path.push(remaining.remove(0));
        }
        Self {
            distances,
            remaining,
            path,
            weight: 0.0,
            state: SolverState::Created,
            solved: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Vertices visited so far, in order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Vertices not yet visited.
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Length of the path built so far.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Appends the nearest remaining vertex to the path.
    ///
    /// Returns `None` once every vertex has been visited.
    pub fn step(&mut self) -> Option<Snapshot> {
        if self.state == SolverState::Solved {
            return None;
        }

        let next = self.path.last().and_then(|&last| {
            self.distances
                .nearest_neighbor(last, &self.remaining)
                .map(|n| (last, n))
        });
        let Some((last, next)) = next else {
            self.finish();
            return None;
        };

        self.state = SolverState::Solving;
        self.remaining.retain(|&v| v != next);
        self.weight += self.distances.get(last, next);
        self.path.push(next);
        log::debug!(
            "nn: step={} vertex={} weight={:.3}",
            self.path.len() - 1,
            next,
            self.weight
        );

        let snapshot = Snapshot {
            step: self.path.len() - 1,
            order: self.path.clone(),
            weight: self.weight,
        };
        if self.remaining.is_empty() {
            self.finish();
        }
        Some(snapshot)
    }

    /// Runs the remaining steps and returns the finished tour.
    ///
    /// Calling this again returns the cached tour without recomputation.
    pub fn solve(&mut self) -> &Tour {
        while self.step().is_some() {}
        let (path, distances) = (&self.path, self.distances);
        self.solved
            .get_or_insert_with(|| Tour::from_valid_order(path.clone(), distances))
    }

    /// Runs to completion and returns the tour by value.
    pub fn into_tour(mut self) -> Tour {
        self.solve();
        self.solved
            .unwrap_or_else(|| Tour::from_valid_order(self.path, self.distances))
    }

    fn finish(&mut self) {
        self.state = SolverState::Solved;
        if self.solved.is_none() {
            self.solved = Some(Tour::from_valid_order(self.path.clone(), self.distances));
            log::info!(
                "nn: solved vertices={} weight={:.3}",
                self.path.len(),
                self.weight
            );
        }
    }
}

impl Iterator for NearestNeighbor<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        self.step()
    }
}

impl FusedIterator for NearestNeighbor<'_> {}

/// Builds a tour with the nearest-neighbor heuristic.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ]);
/// let tour = nearest_neighbor(&dm);
/// assert_eq!(tour.order(), &[0, 1, 2, 3]);
/// assert!((tour.weight() - 30.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Tour {
    NearestNeighbor::new(distances).into_tour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_permutation, Point};

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ])
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = line();
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.order(), &[0, 2, 3, 1]);
        assert!((tour.weight() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_square_scenario() {
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        let tour = nearest_neighbor(&dm);
        // (10,0) and (0,10) tie from the start; the earlier one wins.
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        assert!((tour.weight() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_exact_step_count() {
        let dm = line();
        let snapshots: Vec<Snapshot> = NearestNeighbor::new(&dm).collect();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[0].order, vec![0, 2]);
        assert_eq!(snapshots[1].order, vec![0, 2, 3]);
        assert_eq!(snapshots[2].order, vec![0, 2, 3, 1]);
        assert_eq!(
            snapshots.iter().map(|s| s.step).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!((snapshots[2].weight - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_lifecycle() {
        let dm = line();
        let mut nn = NearestNeighbor::new(&dm);
        assert_eq!(nn.state(), SolverState::Created);
        assert_eq!(nn.path(), &[0]);
        assert_eq!(nn.remaining(), &[1, 2, 3]);

        nn.step();
        assert_eq!(nn.state(), SolverState::Solving);
        nn.step();
        nn.step();
        assert_eq!(nn.state(), SolverState::Solved);
        assert!(nn.remaining().is_empty());
        assert!(nn.step().is_none());
    }

    #[test]
    fn test_nn_solve_idempotent() {
        let dm = line();
        let mut nn = NearestNeighbor::new(&dm);
        let first = nn.solve().clone();
        let second = nn.solve().clone();
        assert_eq!(first, second);
        assert_eq!(nn.path(), first.order());
    }

    #[test]
    fn test_nn_empty() {
        let dm = DistanceMatrix::new(0);
        let mut nn = NearestNeighbor::new(&dm);
        assert!(nn.next().is_none());
        assert_eq!(nn.state(), SolverState::Solved);
        assert!(nn.solve().is_empty());
    }

    #[test]
    fn test_nn_single_vertex() {
        let dm = DistanceMatrix::new(1);
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.order(), &[0]);
        assert_eq!(tour.weight(), 0.0);
    }

    #[test]
    fn test_nn_permutation_random_points() {
        let mut rng = u_numflow::random::create_rng(42);
        let points = crate::models::random_points(40, 100.0, 100.0, &mut rng);
        let dm = DistanceMatrix::from_points(&points);
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.len(), 40);
        assert!(is_permutation(tour.order()));
    }

    #[test]
    fn test_nn_tolerates_missing_edges() {
        // Vertex 2 is unreachable from everywhere; it is still visited last.
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_data(
            3,
            vec![0.0, 1.0, inf, 1.0, 0.0, inf, inf, inf, 0.0],
        )
        .expect("3x3");
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.order(), &[0, 1, 2]);
        assert_eq!(tour.weight(), inf);
    }
}
