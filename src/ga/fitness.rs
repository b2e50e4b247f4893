//! Fitness scoring for a generation of tours.
//!
//! Each tour's weight is mapped linearly from `[min, max]` onto
//! `[1.0, 0.01]`, so the shortest tour scores highest, and the scores are
//! then normalized to sum to one. The result is the categorical
//! distribution that roulette selection samples from.

use crate::models::Tour;

/// Raw fitness of the shortest tour in a generation.
pub const BEST_RAW_FITNESS: f64 = 1.0;

/// Raw fitness of the longest tour in a generation.
pub const WORST_RAW_FITNESS: f64 = 0.01;

/// Outcome of scoring one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessSummary {
    /// Smallest finite weight, if any.
    pub min_weight: f64,
    /// Largest finite weight, if any.
    pub max_weight: f64,
    /// `true` when the weights could not be spread and fitness is uniform.
    pub uniform: bool,
}

/// Assigns normalized fitness to every tour.
///
/// When every weight is equal, infinite ones included, every tour gets
/// `1 / len`. Tours with an infinite weight score as the worst tour, and when
/// all finite weights are equal those tours share the best score.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::assign_fitness;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(5.0, 0.0),
/// ]);
/// let mut tours = vec![
///     Tour::new(vec![0, 1, 2], &dm).unwrap(), // 5
///     Tour::new(vec![0, 2, 1], &dm).unwrap(), // 9
/// ];
/// let summary = assign_fitness(&mut tours);
/// assert!(!summary.uniform);
/// assert!(tours[0].fitness() > tours[1].fitness());
/// assert!((tours[0].fitness() + tours[1].fitness() - 1.0).abs() < 1e-12);
/// ```
pub fn assign_fitness(population: &mut [Tour]) -> FitnessSummary {
    let (min_weight, max_weight) = population
        .iter()
        .map(Tour::weight)
        .filter(|w| w.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
            (lo.min(w), hi.max(w))
        });

    let finite = population
        .iter()
        .filter(|tour| tour.weight().is_finite())
        .count();
    let range = max_weight - min_weight;
    let spread = range.is_finite() && range > 0.0;
    if finite == 0 || (finite == population.len() && !spread) {
        let uniform = 1.0 / population.len().max(1) as f64;
        for tour in population.iter_mut() {
            tour.set_fitness(uniform);
        }
        log::debug!(
            "ga: uniform fitness tours={} min_weight={} max_weight={}",
            population.len(),
            min_weight,
            max_weight
        );
        return FitnessSummary {
            min_weight,
            max_weight,
            uniform: true,
        };
    }

    let mut total = 0.0;
    for tour in population.iter_mut() {
        let raw = if !tour.weight().is_finite() {
            WORST_RAW_FITNESS
        } else if spread {
            BEST_RAW_FITNESS
                + (tour.weight() - min_weight) * (WORST_RAW_FITNESS - BEST_RAW_FITNESS) / range
        } else {
            BEST_RAW_FITNESS
        };
        tour.set_fitness(raw);
        total += raw;
    }
    for tour in population.iter_mut() {
        tour.set_fitness(tour.fitness() / total);
    }

    FitnessSummary {
        min_weight,
        max_weight,
        uniform: false,
    }
}
