//! Variation operators and reproduction for tours with a pinned start.
//!
//! Every operator keeps position 0 in place, so all tours in a run start at
//! the same vertex and differ only in the order of the rest.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::models::Tour;

use super::config::{GaConfig, ReproductionStrategy};
use super::selection::roulette_select;

/// Neighbor-swap mutation.
///
/// Visits every position `i` and, with probability `rate`, swaps it with
/// position `(i + 1) mod len`. Position 0 swaps `1 ↔ 2` instead, and the
/// wrap from the last position swaps with 1 instead of 0. Orders of length
/// two or less have a single movable element and are left unchanged.
///
/// Returns the number of swaps performed.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::swap_mutation;
///
/// let mut order = vec![0, 1, 2, 3, 4];
/// let mut rng = u_numflow::random::create_rng(42);
/// swap_mutation(&mut order, 1.0, &mut rng);
/// assert_eq!(order[0], 0);
///
/// let mut untouched = vec![0, 1, 2, 3];
/// assert_eq!(swap_mutation(&mut untouched, 0.0, &mut rng), 0);
/// assert_eq!(untouched, vec![0, 1, 2, 3]);
/// ```
pub fn swap_mutation<R: Rng>(order: &mut [usize], rate: f64, rng: &mut R) -> usize {
    let len = order.len();
    if len <= 2 {
        return 0;
    }
    let mut swaps = 0;
    for i in 0..len {
        if rng.random::<f64>() >= rate {
            continue;
        }
        let (a, b) = swap_pair(i, len);
        order.swap(a, b);
        swaps += 1;
    }
    swaps
}

/// Positions swapped when mutating position `i`; never touches 0.
fn swap_pair(i: usize, len: usize) -> (usize, usize) {
    match (i, (i + 1) % len) {
        (0, _) => (1, 2),
        (i, 0) => (i, 1),
        pair => pair,
    }
}

/// Order crossover that keeps the first element of `first` pinned.
///
/// Copies a random slice of `first` (after position 0) and appends the
/// remaining elements in the order they appear in `second`. Both parents must
/// be permutations of the same index set with the same start.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::order_crossover;
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let child = order_crossover(&[0, 1, 2, 3, 4], &[0, 4, 3, 2, 1], &mut rng);
/// assert_eq!(child[0], 0);
/// let mut sorted = child.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn order_crossover<R: Rng>(first: &[usize], second: &[usize], rng: &mut R) -> Vec<usize> {
    let n = first.len();
    if n <= 2 {
        return first.to_vec();
    }

    let start = rng.random_range(1..n);
    let end = rng.random_range(start + 1..=n);

    let mut taken = vec![false; n];
    let mut child = Vec::with_capacity(n);
    for &v in std::iter::once(&first[0]).chain(&first[start..end]) {
        taken[v] = true;
        child.push(v);
    }
    for &v in second {
        if !taken[v] {
            taken[v] = true;
            child.push(v);
        }
    }
    child
}

/// Produces the next generation from a scored population.
///
/// Each of the `population.len()` slots gets a child built according to
/// `config.reproduction`, mutated with `config.mutation_rate`, and
/// re-weighted from `distances`. Children start unscored (fitness 0).
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn reproduce<R: Rng>(
    population: &[Tour],
    distances: &DistanceMatrix,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Tour> {
    let mut next = Vec::with_capacity(population.len());
    for _ in 0..population.len() {
        let parent = &population[roulette_select(population, rng)];
        let mut child = match config.reproduction {
            ReproductionStrategy::CloneAndMutate => parent.clone(),
            ReproductionStrategy::OrderCrossover => {
                let other = &population[roulette_select(population, rng)];
                let order = order_crossover(parent.order(), other.order(), rng);
                Tour::from_valid_order(order, distances)
            }
        };
        if swap_mutation(child.order_mut(), config.mutation_rate, rng) > 0 {
            child.recompute_weight(distances);
        }
        child.set_fitness(0.0);
        next.push(child);
    }
    next
}
