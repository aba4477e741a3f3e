//! One generation step: elitism, tournament selection, and crossover.

use rand::Rng;
use tracing::debug;

use super::crossover::crossover;
use super::selection::{fittest_chromosome, tournament};
use crate::error::MdvrpResult;
use crate::models::Population;

/// Builds the next generation from `population`.
///
/// The fittest chromosome is carried over unchanged at index 0. Remaining
/// slots are filled with offspring of tournament-selected parents, each
/// offspring re-evaluated before being added. If the last pair overshoots
/// the population size by one, the most recently added offspring is
/// dropped. Input chromosomes must already be evaluated.
///
/// # Errors
///
/// Propagates selection and crossover failures, e.g. when the population
/// is smaller than `tournament_size`.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Customer, Depot};
/// use u_mdvrp::ga::{generate_chromosome_sample, generate_initial_population, next_generation};
/// use u_mdvrp::random::create_rng;
///
/// let depots = vec![Depot::new(1, 0.0, 0.0, 20.0), Depot::new(2, 30.0, 0.0, 20.0)];
/// let customers: Vec<Customer> = (1..=12)
///     .map(|i| Customer::new(i, (i * 3) as f64, (i % 4) as f64, 6.0))
///     .collect();
/// let sample = generate_chromosome_sample(&depots, &customers);
///
/// let mut rng = create_rng(42);
/// let mut pop = generate_initial_population(&sample, 6, &mut rng);
/// pop.evaluate_all();
/// let best = pop.best().unwrap().fitness();
///
/// let next = next_generation(&pop, 0.8, 2, &mut rng).unwrap();
/// assert_eq!(next.len(), 6);
/// assert!(next.best().unwrap().fitness() <= best);
/// ```
pub fn next_generation<R: Rng>(
    population: &Population,
    tournament_probability: f64,
    tournament_size: usize,
    rng: &mut R,
) -> MdvrpResult<Population> {
    let target = population.len();
    let mut next = Population::new(population.id() + 1);
    let Some(elite) = fittest_chromosome(population) else {
        return Ok(next);
    };
    next.push(elite.clone());

    while next.len() < target {
        let parents = tournament(population, tournament_probability, tournament_size, rng)?;
        let outcome = crossover(parents, rng)?;
        for mut child in outcome.offspring {
            child.evaluate();
            next.push(child);
        }
    }
    if next.len() > target {
        next.pop();
    }

    debug!(
        generation = next.id(),
        size = next.len(),
        best = next.best().map(|c| c.fitness()),
        "generation complete"
    );
    Ok(next)
}
