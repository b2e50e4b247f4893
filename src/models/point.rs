//! Planar point type.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean_distance(self, other)
    }

    /// Draws a point uniformly from `[0, width) × [0, height)`.
    ///
    /// A zero-sized side collapses to the coordinate `0.0`.
    pub fn random<R: Rng>(width: f64, height: f64, rng: &mut R) -> Self {
        let x = if width > 0.0 {
            rng.random_range(0.0..width)
        } else {
            0.0
        };
        let y = if height > 0.0 {
            rng.random_range(0.0..height)
        } else {
            0.0
        };
        Self::new(x, y)
    }
}

/// Euclidean distance between two points.
pub fn euclidean_distance(from: &Point, to: &Point) -> f64 {
    let dx = from.x - to.x;
    let dy = from.y - to.y;
    (dx * dx + dy * dy).sqrt()
}

/// Generates `count` random points inside a `width × height` area.
///
/// # Examples
///
/// ```
/// use u_tsp::models::random_points;
///
/// let mut rng = u_numflow::random::create_rng(7);
/// let points = random_points(25, 400.0, 300.0, &mut rng);
/// assert_eq!(points.len(), 25);
/// assert!(points.iter().all(|p| p.x() < 400.0 && p.y() < 300.0));
/// ```
pub fn random_points<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    (0..count)
        .map(|_| Point::random(width, height, rng))
        .collect()
}
