//! Building the first chromosome and the initial population.

use rand::Rng;

use super::routing::{initialize_routing, randomize_customers};
use crate::distance::nearest;
use crate::models::{Chromosome, Customer, Depot, Population};

/// Assigns every customer to its nearest depot.
///
/// Depots are copied with their sequences cleared; the chromosome capacity
/// is taken from the first depot. The result is not routed yet.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Customer, Depot};
/// use u_mdvrp::ga::generate_chromosome_sample;
///
/// let depots = vec![Depot::new(51, 0.0, 0.0, 80.0), Depot::new(52, 100.0, 0.0, 80.0)];
/// let customers = vec![Customer::new(1, 10.0, 0.0, 5.0), Customer::new(2, 90.0, 0.0, 5.0)];
/// let sample = generate_chromosome_sample(&depots, &customers);
///
/// assert_eq!(sample.len(), 2);
/// assert_eq!(sample.depots()[0].get(0).map(|c| c.id()), Some(1));
/// assert_eq!(sample.depots()[1].get(0).map(|c| c.id()), Some(2));
/// ```
pub fn generate_chromosome_sample(depots: &[Depot], customers: &[Customer]) -> Chromosome {
    let capacity = depots.first().map_or(0.0, Depot::capacity);
    let mut assigned: Vec<Depot> = depots
        .iter()
        .map(|d| Depot::new(d.id(), d.x(), d.y(), d.capacity()))
        .collect();

    for customer in customers.iter().filter(|c| !c.is_separator()) {
        if let Some(index) = nearest(customer, &assigned) {
            assigned[index].push(customer.clone());
        }
    }
    Chromosome::new(0, capacity, assigned)
}

/// Creates `size` independent copies of `sample`, each with shuffled
/// customers and fresh route segmentation.
///
/// Chromosomes are left unevaluated.
pub fn generate_initial_population<R: Rng>(
    sample: &Chromosome,
    size: usize,
    rng: &mut R,
) -> Population {
    let chromosomes = (0..size)
        .map(|_| {
            let mut chromosome = sample.clone();
            randomize_customers(&mut chromosome, rng);
            initialize_routing(&mut chromosome);
            chromosome
        })
        .collect();
    Population::with_chromosomes(0, chromosomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::euclidean_distance;
    use crate::random::create_rng;

    fn instance() -> (Vec<Depot>, Vec<Customer>) {
        let depots = vec![
            Depot::new(51, 20.0, 20.0, 80.0),
            Depot::new(52, 30.0, 40.0, 80.0),
            Depot::new(53, 50.0, 30.0, 80.0),
        ];
        let customers = (1..=15)
            .map(|i| Customer::new(i, ((i * 13) % 60) as f64, ((i * 29) % 50) as f64, (i % 7 + 5) as f64))
            .collect();
        (depots, customers)
    }

    #[test]
    fn test_sample_assigns_nearest_depot() {
        let (depots, customers) = instance();
        let sample = generate_chromosome_sample(&depots, &customers);
        assert_eq!(sample.len(), depots.len());
        assert_eq!(sample.capacity(), 80.0);
        for c in &customers {
            let expected = depots
                .iter()
                .enumerate()
                .min_by(|a, b| {
                    euclidean_distance(c, a.1)
                        .partial_cmp(&euclidean_distance(c, b.1))
                        .expect("finite")
                })
                .map(|(i, _)| i)
                .expect("depots");
            assert!(sample.depots()[expected].contains(c));
        }
        assert_eq!(sample.customer_count(), customers.len());
        assert_eq!(sample.route_count(), 0);
    }

    #[test]
    fn test_sample_ignores_input_sequences() {
        let (mut depots, customers) = instance();
        depots[0].push(Customer::new(999, 0.0, 0.0, 1.0));
        let sample = generate_chromosome_sample(&depots, &customers);
        assert_eq!(sample.customer_count(), customers.len());
    }

    #[test]
    fn test_initial_population_is_routed_and_independent() {
        let (depots, customers) = instance();
        let sample = generate_chromosome_sample(&depots, &customers);
        let mut rng = create_rng(42);
        let mut pop = generate_initial_population(&sample, 10, &mut rng);
        assert_eq!(pop.len(), 10);
        for ch in &pop {
            assert_eq!(ch.id(), sample.id());
            assert!(!ch.is_evaluated());
            assert_eq!(ch.customer_count(), customers.len());
            assert!(ch.iter().all(|d| d.get(d.len() - 1).is_some_and(Customer::is_separator)));
        }

        pop.get_mut(0).expect("member").depots_mut()[0].clear();
        assert_eq!(pop.get(1).expect("member").customer_count(), customers.len());
        assert_eq!(sample.customer_count(), customers.len());
    }
}
