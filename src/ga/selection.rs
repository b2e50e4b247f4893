//! Fitness-proportionate (roulette wheel) selection.
//!
//! Assumes fitness has already been normalized by
//! [`assign_fitness`](super::assign_fitness) so that it sums to one.
//!
//! # Reference
//!
//! Goldberg, D.E. (1989). *Genetic Algorithms in Search, Optimization, and
//! Machine Learning*, Addison-Wesley, ch. 1.

use rand::Rng;

use crate::models::Tour;

/// Selects a tour index with probability proportional to its fitness.
///
/// Draws `r` from `[0, 1)` and walks the population subtracting each
/// fitness until `r` drops to or below zero. If rounding leaves `r`
/// positive after the last tour, the last index is returned.
///
/// # Panics
///
/// Panics if `population` is empty.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::roulette_select;
///
/// let dm = DistanceMatrix::new(1);
/// let mut only = Tour::new(vec![0], &dm).unwrap();
/// only.set_fitness(1.0);
///
/// let mut rng = u_numflow::random::create_rng(42);
/// assert_eq!(roulette_select(&[only], &mut rng), 0);
/// ```
pub fn roulette_select<R: Rng>(population: &[Tour], rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let r: f64 = rng.random();
    walk_wheel(population, r)
}

/// Deterministic part of the wheel walk for a given draw.
fn walk_wheel(population: &[Tour], mut r: f64) -> usize {
    for (i, tour) in population.iter().enumerate() {
        r -= tour.fitness();
        if r <= 0.0 {
            return i;
        }
    }
    let last = population.len() - 1;
    log::debug!("ga: roulette overrun residual={:e} clamped_to={}", r, last);
    last
}
