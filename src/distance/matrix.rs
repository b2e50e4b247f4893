//! Dense distance matrix.

use std::collections::HashMap;

use crate::models::{Graph, Point};

/// A dense n×n distance matrix stored in row-major order.
///
/// Row and column `i` correspond to the vertex with
/// [`index`](crate::models::Vertex::index) `i`. Pairs without an edge hold
/// `f64::INFINITY`; the diagonal is always zero.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix directly from coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Materializes the edge weights of a graph.
    ///
    /// Cell `(i, j)` takes the weight of the first `i → j` edge, or
    /// `f64::INFINITY` when there is none. Self-distance is forced to zero.
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut dm = Self {
            data: vec![f64::INFINITY; n * n],
            size: n,
        };

        let index_of: HashMap<_, _> = graph
            .vertices()
            .iter()
            .map(|v| (v.id(), v.index()))
            .collect();

        // Walk in reverse so the first matching edge wins.
        for edge in graph.edges().iter().rev() {
            let start = index_of.get(&edge.start());
            if let (Some(&i), Some(&j)) = (start, index_of.get(&edge.end())) {
                dm.set(i, j, edge.weight());
            }
        }
        for i in 0..n {
            dm.set(i, i, 0.0);
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from vertex `from` to vertex `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from vertex `from` to vertex `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of vertices in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns one row as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol || a.is_nan() || b.is_nan() {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
