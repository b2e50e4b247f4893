//! Genetic algorithm over tours with a pinned start vertex.
//!
//! - [`GeneticSolver`] — Step-wise evolutionary loop with elitism
//! - [`assign_fitness`] — Linear weight → fitness mapping, normalized
//! - [`roulette_select`] — Fitness-proportionate selection
//! - [`swap_mutation`], [`order_crossover`], [`reproduce`] — Variation

mod config;
mod engine;
mod fitness;
mod operators;
mod selection;

pub use config::{GaConfig, ReproductionStrategy};
pub use engine::{GaResult, GeneticSolver};
pub use fitness::{assign_fitness, FitnessSummary, BEST_RAW_FITNESS, WORST_RAW_FITNESS};
pub use operators::{order_crossover, reproduce, swap_mutation};
pub use selection::roulette_select;
