//! Parent selection: random sampling and binary tournament.

use rand::seq::index::sample;
use rand::Rng;

use crate::error::{MdvrpError, MdvrpResult};
use crate::models::{Chromosome, Population};

/// Default probability of a fitness-driven tournament.
pub const DEFAULT_TOURNAMENT_PROBABILITY: f64 = 0.8;

/// Default tournament sample size (binary tournament).
pub const DEFAULT_TOURNAMENT_SIZE: usize = 2;

/// Draws `size` distinct chromosomes (cloned) from the population.
///
/// # Errors
///
/// [`MdvrpError::SampleTooLarge`] if `size` exceeds the population size.
pub fn extract_population<R: Rng>(
    population: &Population,
    size: usize,
    rng: &mut R,
) -> MdvrpResult<Population> {
    if size > population.len() {
        return Err(MdvrpError::SampleTooLarge {
            requested: size,
            available: population.len(),
        });
    }
    let chromosomes = sample(rng, population.len(), size)
        .into_iter()
        .filter_map(|i| population.get(i).cloned())
        .collect();
    Ok(Population::with_chromosomes(0, chromosomes))
}

/// The chromosome with the lowest cached fitness (first on ties).
pub fn fittest_chromosome(population: &Population) -> Option<&Chromosome> {
    population.best()
}

/// Selects two parents.
///
/// A first sample of `size` distinct chromosomes is drawn. With probability
/// `probability` a second sample is drawn and the fittest of each sample
/// become the parents. Otherwise two distinct members of the first sample
/// are returned as-is, bypassing fitness pressure.
///
/// Parents are clones; the source population is left untouched.
///
/// # Errors
///
/// [`MdvrpError::InvalidConfig`] if `size` is below 2,
/// [`MdvrpError::SampleTooLarge`] if it exceeds the population size.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Chromosome, Population};
/// use u_mdvrp::ga::tournament;
/// use u_mdvrp::random::create_rng;
///
/// let mut pop = Population::new(0);
/// for id in 0..6 {
///     let mut c = Chromosome::new(id, 10.0, vec![]);
///     c.set_fitness(id as f64);
///     pop.push(c);
/// }
/// let mut rng = create_rng(42);
/// let parents = tournament(&pop, 0.8, 2, &mut rng).unwrap();
/// assert_eq!(parents.len(), 2);
/// ```
pub fn tournament<R: Rng>(
    population: &Population,
    probability: f64,
    size: usize,
    rng: &mut R,
) -> MdvrpResult<Population> {
    if size < 2 {
        return Err(MdvrpError::InvalidConfig(format!(
            "tournament size must be at least 2, got {size}"
        )));
    }
    let first = extract_population(population, size, rng)?;

    if rng.random::<f64>() <= probability {
        let second = extract_population(population, size, rng)?;
        let parents = [&first, &second]
            .into_iter()
            .filter_map(|p| fittest_chromosome(p).cloned())
            .collect();
        Ok(Population::with_chromosomes(0, parents))
    } else {
        let parents = sample(rng, first.len(), 2)
            .into_iter()
            .filter_map(|i| first.get(i).cloned())
            .collect();
        Ok(Population::with_chromosomes(0, parents))
    }
}
