//! Tour type: one candidate visiting order.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

use super::{Graph, VertexId};

/// A visiting order over all vertices with its weight and GA fitness.
///
/// `order` holds vertex indices and is always a permutation of
/// `0..order.len()`. The weight is the open-path length along `order`
/// (no return leg). Fitness is only meaningful after GA scoring.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::DistanceMatrix;
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tour = Tour::new(vec![0, 1, 2], &dm).unwrap();
/// assert!((tour.weight() - 7.0).abs() < 1e-10);
/// assert!(Tour::new(vec![0, 0, 2], &dm).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    order: Vec<usize>,
    weight: f64,
    fitness: f64,
}

impl Tour {
    /// Creates a tour from an order, validating it against the matrix.
    pub fn new(order: Vec<usize>, distances: &DistanceMatrix) -> Result<Self> {
        if order.len() != distances.size() {
            return Err(TspError::InvalidTourOperation(format!(
                "tour visits {} vertices but matrix has {}",
                order.len(),
                distances.size()
            )));
        }
        if !is_permutation(&order) {
            return Err(TspError::InvalidTourOperation(
                "order is not a permutation of the vertex indices".into(),
            ));
        }
        Ok(Self::from_valid_order(order, distances))
    }

    /// Creates a random tour of all matrix vertices starting at vertex 0.
    pub fn random<R: Rng>(distances: &DistanceMatrix, rng: &mut R) -> Self {
        let n = distances.size();
        let mut order: Vec<usize> = (0..n).collect();
        if n > 2 {
            order[1..].shuffle(rng);
        }
        Self::from_valid_order(order, distances)
    }

    /// Builds a tour from an order already known to be a permutation.
    pub(crate) fn from_valid_order(order: Vec<usize>, distances: &DistanceMatrix) -> Self {
        debug_assert!(is_permutation(&order));
        let weight = tour_weight(&order, distances);
        Self {
            order,
            weight,
            fitness: 0.0,
        }
    }

    /// Vertex indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access to the order for in-place operators.
    ///
    /// Callers must keep it a permutation and call
    /// [`recompute_weight`](Self::recompute_weight) afterwards.
    pub(crate) fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Total open-path length.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Normalized GA fitness (higher is better).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sets the fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Recomputes the weight from the matrix.
    pub fn recompute_weight(&mut self, distances: &DistanceMatrix) {
        self.weight = tour_weight(&self.order, distances);
    }

    /// First vertex of the tour, if any.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Number of vertices visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for the empty tour.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves the order to vertex handles of `graph`.
    ///
    /// Indices not present in the graph are skipped.
    pub fn vertex_ids(&self, graph: &Graph) -> Vec<VertexId> {
        self.order
            .iter()
            .filter_map(|&i| graph.vertex_at(i).map(|v| v.id()))
            .collect()
    }
}

/// Sum of consecutive distances along `order`.
pub fn tour_weight(order: &[usize], distances: &DistanceMatrix) -> f64 {
    order
        .windows(2)
        .map(|pair| distances.get(pair[0], pair[1]))
        .sum()
}

/// Returns `true` if `order` contains every value of `0..order.len()` once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &i in order {
        match seen.get_mut(i) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
    }

    #[test]
    fn test_tour_weight_open_path() {
        let dm = square();
        let tour = Tour::new(vec![0, 1, 2, 3], &dm).expect("valid");
        assert!((tour.weight() - 30.0).abs() < 1e-10);
        assert_eq!(tour.start(), Some(0));
        assert_eq!(tour.len(), 4);
        assert_eq!(tour.fitness(), 0.0);
    }

    #[test]
    fn test_tour_rejects_duplicates() {
        let dm = square();
        assert!(matches!(
            Tour::new(vec![0, 1, 1, 3], &dm),
            Err(TspError::InvalidTourOperation(_))
        ));
    }

    #[test]
    fn test_tour_rejects_wrong_length() {
        let dm = square();
        assert!(Tour::new(vec![0, 1, 2], &dm).is_err());
        assert!(Tour::new(vec![0, 1, 2, 3, 4], &dm).is_err());
    }

    #[test]
    fn test_tour_rejects_out_of_range() {
        let dm = square();
        assert!(Tour::new(vec![0, 1, 2, 7], &dm).is_err());
    }

    #[test]
    fn test_random_tour_pinned_start() {
        let dm = square();
        let mut rng = u_numflow::random::create_rng(42);
        for _ in 0..20 {
            let tour = Tour::random(&dm, &mut rng);
            assert_eq!(tour.start(), Some(0));
            assert!(is_permutation(tour.order()));
            assert!((tour.weight() - tour_weight(tour.order(), &dm)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_random_tour_small() {
        let mut rng = u_numflow::random::create_rng(42);
        let empty = DistanceMatrix::new(0);
        assert!(Tour::random(&empty, &mut rng).is_empty());
        let one = DistanceMatrix::new(1);
        assert_eq!(Tour::random(&one, &mut rng).order(), &[0]);
    }

    #[test]
    fn test_recompute_weight() {
        let dm = square();
        let mut tour = Tour::new(vec![0, 1, 2, 3], &dm).expect("valid");
        tour.order_mut().swap(1, 3);
        tour.recompute_weight(&dm);
        // 0→3→2→1 = 10 + 10 + 10
        assert!((tour.weight() - 30.0).abs() < 1e-10);
        tour.order_mut().swap(1, 2);
        tour.recompute_weight(&dm);
        // 0→2→3→1 = 14.14 + 10 + 14.14
        assert!((tour.weight() - (10.0 + 2.0 * 200f64.sqrt())).abs() < 1e-10);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[0, 2]));
        assert!(!is_permutation(&[1, 1]));
    }

    #[test]
    fn test_vertex_ids() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let graph = crate::solver::build_graph(&points);
        let dm = DistanceMatrix::from_points(&points);
        let tour = Tour::new(vec![1, 0], &dm).expect("valid");
        let ids = tour.vertex_ids(&graph);
        assert_eq!(ids, vec![graph.vertices()[1].id(), graph.vertices()[0].id()]);
    }
}
