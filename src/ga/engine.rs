//! GA evolutionary loop.
//!
//! [`GeneticSolver`] runs one generation per step:
//! scoring → elitism update → reproduction → next step.
//! The shortest tour seen so far is retained across generations and is the
//! solver's running answer.

use std::iter::FusedIterator;

use rand::rngs::SmallRng;
use u_numflow::random::create_rng;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::{is_permutation, Tour};
use crate::solver::{Snapshot, SolverState};

use super::config::GaConfig;
use super::fitness::assign_fitness;
use super::operators::reproduce;

/// Result of a completed GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Shortest tour found during the entire run.
    pub best: Tour,

    /// Weight of `best`.
    pub best_weight: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Retained best weight at the end of each generation.
    pub weight_history: Vec<f64>,
}

/// Step-wise genetic algorithm solver.
///
/// All tours start at vertex 0. Each step scores the current generation,
/// updates the retained best, and (unless it was the last generation) breeds
/// the next one. Dropping the solver between steps abandons the run; the
/// retained best is always a fully scored tour.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::{GaConfig, GeneticSolver};
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(3.0, 0.0),
/// ]);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
///
/// let solver = GeneticSolver::new(&dm, config).unwrap();
/// let result = solver.run();
/// assert_eq!(result.generations, 30);
/// assert_eq!(result.best.start(), Some(0));
/// assert!(result.best_weight >= 3.0 - 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver<'a> {
    distances: &'a DistanceMatrix,
    config: GaConfig,
    rng: SmallRng,
    population: Vec<Tour>,
    best: Option<Tour>,
    generation: usize,
    state: SolverState,
    weight_history: Vec<f64>,
}

impl<'a> GeneticSolver<'a> {
    /// Creates a solver with a random initial population.
    pub fn new(distances: &'a DistanceMatrix, config: GaConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let population = (0..config.population_size)
            .map(|_| Tour::random(distances, &mut rng))
            .collect();
        Ok(Self::from_parts(distances, config, rng, population))
    }

    /// Creates a solver from a caller-supplied initial population.
    ///
    /// Every tour must visit all matrix vertices starting at vertex 0, and
    /// there must be exactly `config.population_size` of them. Weights are
    /// recomputed from `distances`.
    pub fn with_population(
        distances: &'a DistanceMatrix,
        config: GaConfig,
        mut population: Vec<Tour>,
    ) -> Result<Self> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(TspError::InvalidTourOperation(format!(
                "population has {} tours, expected {}",
                population.len(),
                config.population_size
            )));
        }
        for tour in &mut population {
            if tour.len() != distances.size() || !is_permutation(tour.order()) {
                return Err(TspError::InvalidTourOperation(
                    "population tour is not a permutation of the matrix vertices".into(),
                ));
            }
            if tour.start().is_some_and(|s| s != 0) {
                return Err(TspError::InvalidTourOperation(
                    "population tour must start at vertex 0".into(),
                ));
            }
            tour.recompute_weight(distances);
        }
        let rng = seeded_rng(config.seed);
        Ok(Self::from_parts(distances, config, rng, population))
    }

    fn from_parts(
        distances: &'a DistanceMatrix,
        config: GaConfig,
        rng: SmallRng,
        population: Vec<Tour>,
    ) -> Self {
        log::info!(
            "ga: start vertices={} population={} generations={} mutation_rate={} reproduction={:?}",
            distances.size(),
            config.population_size,
            config.generations,
            config.mutation_rate,
            config.reproduction
        );
        Self {
            weight_history: Vec::with_capacity(config.generations),
            distances,
            config,
            rng,
            population,
            best: None,
            generation: 0,
            state: SolverState::Created,
        }
    }

    /// Runs one generation.
    ///
    /// Returns the retained best after this generation, or `None` once all
    /// generations have run.
    pub fn step(&mut self) -> Option<Snapshot> {
        if self.state == SolverState::Solved {
            return None;
        }
        self.state = SolverState::Solving;

        let summary = assign_fitness(&mut self.population);
        self.population
            .sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));

        let improved = self.update_best();
        self.generation += 1;

        let best = self
            .best
            .as_ref()
            .expect("population is non-empty, so a best tour exists after scoring");
        let snapshot = Snapshot {
            step: self.generation,
            order: best.order().to_vec(),
            weight: best.weight(),
        };
        self.weight_history.push(best.weight());
        log::debug!(
            "ga: generation={} best_weight={:.3} improved={} min_weight={:.3} max_weight={:.3} uniform={}",
            self.generation,
            best.weight(),
            improved,
            summary.min_weight,
            summary.max_weight,
            summary.uniform
        );

        if self.generation < self.config.generations {
            self.population =
                reproduce(&self.population, self.distances, &self.config, &mut self.rng);
        } else {
            self.state = SolverState::Solved;
            log::info!(
                "ga: solved generations={} best_weight={:.3}",
                self.generation,
                snapshot.weight
            );
        }
        Some(snapshot)
    }

    /// Replaces the retained best if this generation found a shorter tour.
    fn update_best(&mut self) -> bool {
        let Some(candidate) = self
            .population
            .iter()
            .min_by(|a, b| a.weight().total_cmp(&b.weight()))
        else {
            return false;
        };
        if self
            .best
            .as_ref()
            .is_some_and(|best| candidate.weight() >= best.weight())
        {
            return false;
        }
        self.best = Some(candidate.clone());
        true
    }

    /// Runs all remaining generations.
    pub fn run(mut self) -> GaResult {
        while self.step().is_some() {}
        let best = self
            .best
            .expect("at least one generation is scored by a validated config");
        GaResult {
            best_weight: best.weight(),
            best,
            generations: self.generation,
            weight_history: self.weight_history,
        }
    }

    /// Retained best tour, once a generation has been scored.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Current working population.
    ///
    /// After a step it is the freshly bred (unscored) generation, except
    /// after the final step where it is the last scored one.
    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    /// Number of generations run so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Configuration in use.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Retained best weight after each generation so far.
    pub fn weight_history(&self) -> &[f64] {
        &self.weight_history
    }
}

impl Iterator for GeneticSolver<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        self.step()
    }
}

impl FusedIterator for GeneticSolver<'_> {}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
