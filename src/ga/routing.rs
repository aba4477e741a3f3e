//! Initial route segmentation and customer shuffling.

use rand::Rng;
use tracing::warn;

use crate::models::{Chromosome, Depot, Population};

/// Splits a depot's customers into capacity-respecting routes.
///
/// Scans left to right accumulating demand. When the next customer would
/// push the current route over capacity, a separator is inserted before it
/// and accumulation restarts from that customer. A final separator closes
/// the last route; an empty depot gets a single separator (one empty route).
///
/// A customer whose own demand exceeds capacity still ends up alone in an
/// over-capacity route; this is reported with a warning, not corrected.
/// Any separators already present are discarded first.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Customer, Depot};
/// use u_mdvrp::ga::initial_routing;
///
/// let mut depot = Depot::new(1, 0.0, 0.0, 10.0);
/// for (id, q) in [(1, 4.0), (2, 5.0), (3, 3.0), (4, 2.0)] {
///     depot.push(Customer::new(id, 0.0, 0.0, q));
/// }
/// initial_routing(&mut depot);
/// assert_eq!(depot.route_ending_indices(), &[2, 5]);
/// ```
pub fn initial_routing(depot: &mut Depot) {
    depot.strip_separators();
    let capacity = depot.capacity();
    let mut accumulated = 0.0;
    let mut route_len = 0;
    let mut i = 0;

    while i < depot.len() {
        let demand = depot.customers()[i].demand();
        if route_len > 0 && accumulated + demand > capacity {
            depot.insert(i, depot.new_separator());
            i += 1;
            accumulated = 0.0;
            route_len = 0;
        }
        if demand > capacity {
            warn!(
                depot = depot.id(),
                customer = depot.customers()[i].id(),
                demand,
                capacity,
                "customer demand exceeds depot capacity"
            );
        }
        accumulated += demand;
        route_len += 1;
        i += 1;
    }

    let closed = depot.customers().last().is_some_and(|c| c.is_separator());
    if !closed {
        depot.push(depot.new_separator());
    }
}

/// Segments every depot of a chromosome.
pub fn initialize_routing(chromosome: &mut Chromosome) {
    for depot in chromosome.depots_mut() {
        initial_routing(depot);
    }
}

/// Segments every depot of every chromosome in a population.
pub fn initialize_population_routing(population: &mut Population) {
    for chromosome in population.iter_mut() {
        initialize_routing(chromosome);
    }
}

/// Shuffles each depot's customers, dropping any existing route separators.
///
/// Call [`initialize_routing`] afterwards to restore routes.
pub fn randomize_customers<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) {
    for depot in chromosome.depots_mut() {
        depot.shuffle_customers(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::route_spans;
    use crate::models::Customer;
    use crate::random::create_rng;

    fn depot_with(demands: &[f64], capacity: f64) -> Depot {
        let mut d = Depot::new(1, 20.0, 30.0, capacity);
        for (i, &q) in demands.iter().enumerate() {
            d.push(Customer::new(i + 1, i as f64, 0.0, q));
        }
        d
    }

    fn route_demands(depot: &Depot) -> Vec<f64> {
        route_spans(depot)
            .map(|s| depot.customers()[s.start..s.end].iter().map(Customer::demand).sum())
            .collect()
    }

    #[test]
    fn test_scenario_two_routes() {
        let mut d = depot_with(&[4.0, 5.0, 3.0, 2.0], 10.0);
        initial_routing(&mut d);
        assert_eq!(d.len(), 6);
        assert_eq!(d.route_ending_indices(), &[2, 5]);
        assert_eq!(route_demands(&d), vec![9.0, 5.0]);
    }

    #[test]
    fn test_empty_depot_gets_single_separator() {
        let mut d = depot_with(&[], 10.0);
        initial_routing(&mut d);
        assert_eq!(d.len(), 1);
        assert_eq!(d.route_ending_indices(), &[0]);
    }

    #[test]
    fn test_exact_fill_stays_in_route() {
        let mut d = depot_with(&[5.0, 5.0, 5.0], 10.0);
        initial_routing(&mut d);
        assert_eq!(d.route_ending_indices(), &[2, 4]);
    }

    #[test]
    fn test_oversized_customer_is_isolated() {
        let mut d = depot_with(&[15.0, 2.0, 20.0], 10.0);
        initial_routing(&mut d);
        assert_eq!(route_demands(&d), vec![15.0, 2.0, 20.0]);
        assert_eq!(d.route_ending_indices(), &[1, 3, 5]);
        assert!(route_spans(&d).all(|s| !s.is_empty()));
    }

    #[test]
    fn test_routes_respect_capacity() {
        let demands = [7.0, 12.0, 3.0, 9.0, 1.0, 11.0, 4.0, 6.0, 8.0];
        let mut d = depot_with(&demands, 20.0);
        initial_routing(&mut d);
        assert!(d.get(d.len() - 1).expect("entry").is_separator());
        assert!(route_demands(&d).iter().all(|&q| q <= 20.0));
        assert_eq!(d.used_capacity(), demands.iter().sum::<f64>());
    }

    #[test]
    fn test_rerouting_is_stable() {
        let mut d = depot_with(&[4.0, 5.0, 3.0, 2.0], 10.0);
        initial_routing(&mut d);
        initial_routing(&mut d);
        assert_eq!(d.route_ending_indices(), &[2, 5]);
    }

    #[test]
    fn test_randomize_then_route() {
        let mut ch = Chromosome::new(
            0,
            10.0,
            vec![depot_with(&[4.0, 5.0, 3.0, 2.0], 10.0), depot_with(&[9.0, 9.0], 10.0)],
        );
        initialize_routing(&mut ch);
        let mut rng = create_rng(42);
        randomize_customers(&mut ch, &mut rng);
        assert_eq!(ch.route_count(), 0);
        assert_eq!(ch.customer_count(), 6);
        initialize_routing(&mut ch);
        assert!(ch.route_count() >= 4);
        assert!(ch
            .iter()
            .all(|d| route_demands(d).iter().all(|&q| q <= 10.0)));
    }
}
