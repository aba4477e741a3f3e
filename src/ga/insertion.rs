//! Cheapest insertion of an unassigned customer into a chromosome.
//!
//! Used as the repair step of crossover: the customers of a route removed
//! from one parent are redistributed into the other parent one by one.

use tracing::trace;

use super::route::route_spans;
use crate::distance::{euclidean_distance, nearest, Located};
use crate::models::{Chromosome, Customer};

/// Where a customer ended up after [`insert_customer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Index of the depot inside the chromosome.
    pub depot_index: usize,
    /// Absolute index of the customer inside that depot's sequence.
    pub position: usize,
    /// `true` if no existing route had room and a new route was opened.
    pub new_route: bool,
}

/// Inserts `customer` at the cheapest feasible position of its nearest depot.
///
/// The nearest depot (first on ties) is chosen by Euclidean distance. For
/// each route of that depot whose demand plus the customer's stays within
/// capacity, every gap of the closed tour depot → c₁ → … → cₙ → depot is
/// scored by `d(prev, c) + d(c, next) − d(prev, next)`; the globally
/// smallest delta wins (first on ties). When no route has room, the customer
/// is appended in a new route of its own.
///
/// Returns `None` only if the chromosome has no depots.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Chromosome, Customer, Depot};
/// use u_mdvrp::ga::{initial_routing, insert_customer};
///
/// let mut depot = Depot::new(1, 0.0, 0.0, 10.0);
/// depot.push(Customer::new(1, 1.0, 0.0, 3.0));
/// depot.push(Customer::new(2, 3.0, 0.0, 3.0));
/// initial_routing(&mut depot);
/// let mut ch = Chromosome::new(0, 10.0, vec![depot]);
///
/// let c = Customer::new(3, 2.0, 0.0, 3.0);
/// let at = insert_customer(c.clone(), &mut ch).unwrap();
/// assert_eq!((at.depot_index, at.position), (0, 1));
/// assert!(ch.depots()[0].get(1).unwrap().same_as(&c));
/// ```
pub fn insert_customer(customer: Customer, chromosome: &mut Chromosome) -> Option<Insertion> {
    let depot_index = nearest(&customer, chromosome.depots())?;
    let depot = chromosome.get_mut(depot_index)?;
    let capacity = depot.capacity();

    // (absolute position, delta)
    let mut best: Option<(usize, f64)> = None;
    for span in route_spans(depot) {
        let route = &depot.customers()[span.start..span.end];
        let load: f64 = route.iter().map(Customer::demand).sum();
        if load + customer.demand() > capacity {
            continue;
        }

        let mut nodes: Vec<&dyn Located> = Vec::with_capacity(route.len() + 1);
        nodes.push(&*depot);
        nodes.extend(route.iter().map(|c| c as &dyn Located));

        for p in 0..nodes.len() {
            let prev = nodes[p];
            let next = nodes[(p + 1) % nodes.len()];
            let delta = euclidean_distance(prev, &customer) + euclidean_distance(&customer, next)
                - euclidean_distance(prev, next);
            if best.is_none_or(|(_, bd)| delta < bd) {
                best = Some((span.start + p, delta));
            }
        }
    }

    let insertion = match best {
        Some((position, delta)) => {
            trace!(customer = customer.id(), depot_index, position, delta, "cheapest insertion");
            depot.insert(position, customer);
            Insertion {
                depot_index,
                position,
                new_route: false,
            }
        }
        None => {
            trace!(customer = customer.id(), depot_index, "opening new route");
            depot.push(customer);
            depot.push(depot.new_separator());
            Insertion {
                depot_index,
                position: depot.len() - 2,
                new_route: true,
            }
        }
    };
    Some(insertion)
}
