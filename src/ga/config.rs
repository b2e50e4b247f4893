//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// How a child tour is produced from the selected parent(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReproductionStrategy {
    /// Clone one roulette-selected parent, then mutate.
    #[default]
    CloneAndMutate,
    /// Combine two roulette-selected parents with an order crossover that
    /// keeps the pinned start, then mutate.
    OrderCrossover,
}

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::{GaConfig, ReproductionStrategy};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.reproduction, ReproductionStrategy::CloneAndMutate);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(200)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of tours in every generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Per-position probability of a neighbor swap (0.0–1.0).
    pub mutation_rate: f64,

    /// Reproduction policy. Crossover is opt-in.
    pub reproduction: ReproductionStrategy,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.01,
            reproduction: ReproductionStrategy::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the reproduction strategy.
    pub fn with_reproduction(mut self, strategy: ReproductionStrategy) -> Self {
        self.reproduction = strategy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Builder setters clamp, but a deserialized config may carry any value.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.generations == 0 {
            return Err(TspError::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
