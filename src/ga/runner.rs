//! Generational GA loop over a problem instance.

use serde::Serialize;
use tracing::{debug, info, info_span};

use super::config::GaConfig;
use super::evolution::next_generation;
use super::seeding::{generate_chromosome_sample, generate_initial_population};
use crate::error::{MdvrpError, MdvrpResult};
use crate::models::{Chromosome, Customer, Depot};
use crate::random::rng_from_seed;

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best chromosome of the final generation.
    pub best: Chromosome,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Best fitness of the initial population followed by each generation.
    pub history: Vec<f64>,
    /// Number of generation steps performed.
    pub generations: usize,
}

impl GaResult {
    /// Serializable summary of the run, without the chromosome itself.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            best_fitness: self.best_fitness,
            routes: self.best.route_count(),
            customers: self.best.customer_count(),
            generations: self.generations,
            history: self.history.clone(),
        }
    }

    /// Relative gap to a best-known cost, in percent.
    pub fn gap_to(&self, best_known: f64) -> f64 {
        (self.best_fitness - best_known) / best_known * 100.0
    }
}

/// Plain-data view of a [`GaResult`] for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Fitness of the best chromosome.
    pub best_fitness: f64,
    /// Routes in the best chromosome.
    pub routes: usize,
    /// Customers served by the best chromosome.
    pub customers: usize,
    /// Generation steps performed.
    pub generations: usize,
    /// Best fitness per generation, starting with the initial population.
    pub history: Vec<f64>,
}

/// Runs the MDVRP genetic algorithm.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Customer, Depot};
/// use u_mdvrp::ga::{GaConfig, GaRunner};
///
/// let depots = vec![Depot::new(1, 0.0, 0.0, 30.0), Depot::new(2, 20.0, 20.0, 30.0)];
/// let customers: Vec<Customer> = (1..=10)
///     .map(|i| Customer::new(i, (i * 2) as f64, (i * 3 % 20) as f64, 7.0))
///     .collect();
/// let config = GaConfig::default()
///     .with_population_size(8)
///     .with_generations(10)
///     .with_seed(42);
///
/// let result = GaRunner::run(&depots, &customers, &config).unwrap();
/// assert_eq!(result.history.len(), 11);
/// assert!(result.history.windows(2).all(|w| w[1] <= w[0]));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Seeds a population from the instance and evolves it for
    /// `config.generations` steps.
    ///
    /// # Errors
    ///
    /// [`MdvrpError::InvalidConfig`] for an invalid configuration, or any
    /// error raised by a generation step.
    pub fn run(depots: &[Depot], customers: &[Customer], config: &GaConfig) -> MdvrpResult<GaResult> {
        config.validate()?;
        if depots.is_empty() {
            return Err(MdvrpError::InvalidConfig("instance has no depots".into()));
        }

        let span = info_span!("ga_run", depots = depots.len(), customers = customers.len());
        let _guard = span.enter();

        let mut rng = rng_from_seed(config.seed);
        let sample = generate_chromosome_sample(depots, customers);
        let mut population = generate_initial_population(&sample, config.population_size, &mut rng);
        population.evaluate_all();

        let mut best = population
            .best()
            .map(Chromosome::fitness)
            .ok_or_else(|| MdvrpError::InvalidConfig("population_size must be positive".into()))?;
        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(best);
        info!(
            population = config.population_size,
            generations = config.generations,
            initial_best = best,
            "starting GA"
        );

        for generation in 1..=config.generations {
            population = next_generation(
                &population,
                config.tournament_probability,
                config.tournament_size,
                &mut rng,
            )?;
            let current = population.best().map_or(best, Chromosome::fitness);
            if current < best {
                info!(generation, best = current, "improved");
            } else {
                debug!(generation, best = current, "no improvement");
            }
            best = current;
            history.push(best);
        }

        let best_chromosome = population
            .best()
            .cloned()
            .ok_or_else(|| MdvrpError::InvalidConfig("population_size must be positive".into()))?;
        info!(best = best_chromosome.fitness(), routes = best_chromosome.route_count(), "GA finished");

        Ok(GaResult {
            best_fitness: best_chromosome.fitness(),
            best: best_chromosome,
            history,
            generations: config.generations,
        })
    }
}
