//! Route-exchange crossover with cheapest-insertion repair.

use rand::Rng;
use tracing::trace;

use super::insertion::insert_customer;
use super::route::extract_random_route;
use crate::error::{MdvrpError, MdvrpResult};
use crate::models::{Chromosome, Customer, Population};

/// Offspring of one crossover plus the routes that were exchanged.
#[derive(Debug, Clone)]
pub struct CrossoverOutcome {
    /// The two mutated parents. Fitness caches are stale.
    pub offspring: Population,
    /// Customers removed from the first parent and inserted into the second.
    pub route_a: Vec<Customer>,
    /// Customers removed from the second parent and inserted into the first.
    pub route_b: Vec<Customer>,
}

/// Exchanges one random route between two parents.
///
/// A random route is removed from each parent. The customers of the first
/// parent's route are then inserted into the second parent by cheapest
/// insertion, and vice versa. A customer that the recipient already serves
/// elsewhere is detached first, so no chromosome ever holds it twice.
///
/// Customers of a removed route that the other parent also serves are put
/// back into their own chromosome as well. For parents over the same
/// customer set (the usual case inside a population) each offspring keeps
/// every customer exactly once. For disjoint parents the routes simply
/// change hands, and across both offspring every customer of both parents
/// appears exactly once.
///
/// # Errors
///
/// [`MdvrpError::InvalidParents`] unless `parents` holds exactly two
/// chromosomes, [`MdvrpError::NoDepots`] if either parent has no depot.
/// A parent without any route contributes an empty route.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Chromosome, Customer, Depot, Population};
/// use u_mdvrp::ga::{crossover, initialize_routing};
/// use u_mdvrp::random::create_rng;
///
/// let parent = |first_id: usize| {
///     let mut depot = Depot::new(1, 0.0, 0.0, 10.0);
///     for i in 0..4 {
///         depot.push(Customer::new(first_id + i, i as f64, 1.0, 4.0));
///     }
///     let mut ch = Chromosome::new(0, 10.0, vec![depot]);
///     initialize_routing(&mut ch);
///     ch
/// };
/// let parents = Population::with_chromosomes(0, vec![parent(1), parent(101)]);
/// let mut rng = create_rng(42);
/// let out = crossover(parents, &mut rng).unwrap();
///
/// let total: usize = out.offspring.iter().map(|c| c.customer_count()).sum();
/// assert_eq!(total, 8);
/// ```
pub fn crossover<R: Rng>(parents: Population, rng: &mut R) -> MdvrpResult<CrossoverOutcome> {
    let mut chromosomes = parents.into_chromosomes();
    if chromosomes.len() != 2 {
        return Err(MdvrpError::InvalidParents {
            count: chromosomes.len(),
        });
    }
    let mut b = chromosomes.pop().ok_or(MdvrpError::InvalidParents { count: 1 })?;
    let mut a = chromosomes.pop().ok_or(MdvrpError::InvalidParents { count: 0 })?;
    if a.is_empty() || b.is_empty() {
        return Err(MdvrpError::NoDepots);
    }

    let route_a = take_route(&mut a, rng)?;
    let route_b = take_route(&mut b, rng)?;

    let into_a = incoming(&route_b, &route_a, &b);
    let into_b = incoming(&route_a, &route_b, &a);
    trace!(
        parent_a = a.id(),
        parent_b = b.id(),
        moved_a = route_a.len(),
        moved_b = route_b.len(),
        into_a = into_a.len(),
        into_b = into_b.len(),
        "crossover"
    );

    reinsert(into_a, &mut a)?;
    reinsert(into_b, &mut b)?;

    Ok(CrossoverOutcome {
        offspring: Population::with_chromosomes(0, vec![a, b]),
        route_a,
        route_b,
    })
}

/// Removes a random route; a parent left without routes gives nothing.
fn take_route<R: Rng>(parent: &mut Chromosome, rng: &mut R) -> MdvrpResult<Vec<Customer>> {
    match extract_random_route(parent, true, rng) {
        Ok(route) => Ok(route.into_customers()),
        Err(MdvrpError::NoRoutes) => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

/// Customers a chromosome must receive: the other parent's route, plus the
/// entries of its own removed route that `other` still serves.
fn incoming(other_route: &[Customer], own_route: &[Customer], other: &Chromosome) -> Vec<Customer> {
    let shared = own_route.iter().filter(|c| {
        !other_route.iter().any(|m| m.same_as(c)) && other.iter().any(|d| d.contains(c))
    });
    other_route.iter().chain(shared).cloned().collect()
}

fn reinsert(customers: Vec<Customer>, recipient: &mut Chromosome) -> MdvrpResult<()> {
    for customer in customers {
        detach(recipient, &customer);
        insert_customer(customer, recipient).ok_or(MdvrpError::NoDepots)?;
    }
    Ok(())
}

/// Removes `customer` wherever the chromosome holds it. A route emptied by
/// the removal is dropped unless it is the depot's last one.
fn detach(chromosome: &mut Chromosome, customer: &Customer) {
    for depot in chromosome.depots_mut() {
        let Some(index) = depot.index_of(customer) else {
            continue;
        };
        depot.remove_at(index);
        let opens_route = index == 0 || depot.get(index - 1).is_some_and(Customer::is_separator);
        let left_empty = depot.get(index).is_some_and(Customer::is_separator);
        if opens_route && left_empty && depot.route_count() > 1 {
            depot.remove_at(index);
        }
        return;
    }
}
