//! Chromosome fitness: total closed-tour distance plus route count.

use crate::distance::{euclidean_distance, Located};
use crate::ga::route_spans;
use crate::models::{Chromosome, Customer, Depot};

/// Distance and route count behind a fitness value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitnessBreakdown {
    /// Sum of every route's closed-tour length.
    pub total_distance: f64,
    /// Number of routes across all depots.
    pub route_count: usize,
}

impl FitnessBreakdown {
    /// Unweighted sum `total_distance + route_count`. Lower is better.
    pub fn fitness(&self) -> f64 {
        self.total_distance + self.route_count as f64
    }
}

/// Length of the closed tour depot → route customers → depot.
///
/// An empty route has length zero. Separators in `route` are skipped.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Customer, Depot};
/// use u_mdvrp::evaluation::route_distance;
///
/// let depot = Depot::new(1, 0.0, 0.0, 10.0);
/// let route = [Customer::new(1, 3.0, 0.0, 1.0), Customer::new(2, 3.0, 4.0, 1.0)];
/// // 3 + 4 + 5
/// assert!((route_distance(&depot, &route) - 12.0).abs() < 1e-10);
/// ```
pub fn route_distance(depot: &Depot, route: &[Customer]) -> f64 {
    let mut total = 0.0;
    let mut prev: &dyn Located = depot;
    for customer in route.iter().filter(|c| !c.is_separator()) {
        total += euclidean_distance(prev, customer);
        prev = customer;
    }
    total + euclidean_distance(prev, depot)
}

/// Computes distance and route count over every route of every depot.
pub fn breakdown(chromosome: &Chromosome) -> FitnessBreakdown {
    let mut result = FitnessBreakdown::default();
    for depot in chromosome {
        for span in route_spans(depot) {
            result.total_distance += route_distance(depot, &depot.customers()[span.start..span.end]);
        }
        result.route_count += depot.route_count();
    }
    result
}

/// Fitness of a chromosome without caching it.
///
/// Use [`Chromosome::evaluate`] to compute and cache in one step.
pub fn fitness(chromosome: &Chromosome) -> f64 {
    breakdown(chromosome).fitness()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depot(x: f64, y: f64) -> Depot {
        Depot::new(1, x, y, 100.0)
    }

    #[test]
    fn test_empty_route_zero_distance() {
        assert_eq!(route_distance(&depot(5.0, 5.0), &[]), 0.0);
    }

    #[test]
    fn test_single_customer_round_trip() {
        let d = depot(0.0, 0.0);
        let c = Customer::new(1, 3.0, 4.0, 1.0);
        assert!((route_distance(&d, &[c]) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_separator_is_ignored() {
        let d = depot(0.0, 0.0);
        let route = [Customer::new(1, 3.0, 4.0, 1.0), d.new_separator()];
        assert!((route_distance(&d, &route) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_breakdown_counts_empty_routes() {
        let mut d = depot(0.0, 0.0);
        d.push(Customer::new(1, 1.0, 0.0, 1.0));
        d.push(Customer::new(2, 2.0, 0.0, 1.0));
        d.push(d.new_separator());
        d.push(d.new_separator());
        let ch = Chromosome::new(0, 100.0, vec![d, depot(9.0, 9.0)]);

        let b = breakdown(&ch);
        assert_eq!(b.route_count, 2);
        assert!((b.total_distance - 4.0).abs() < 1e-10);
        assert!((b.fitness() - 6.0).abs() < 1e-10);
        assert_eq!(fitness(&ch), b.fitness());
    }

    #[test]
    fn test_multi_depot_sum() {
        let mut a = depot(0.0, 0.0);
        a.push(Customer::new(1, 0.0, 1.0, 1.0));
        a.push(a.new_separator());
        a.push(Customer::new(2, 0.0, -2.0, 1.0));
        a.push(a.new_separator());

        let mut b = Depot::new(2, 10.0, 0.0, 100.0);
        b.push(Customer::new(3, 13.0, 4.0, 1.0));
        b.push(b.new_separator());

        let ch = Chromosome::new(0, 100.0, vec![a, b]);
        let bd = breakdown(&ch);
        // 2 + 4 + 10
        assert!((bd.total_distance - 16.0).abs() < 1e-10);
        assert_eq!(bd.route_count, 3);
    }
}
