//! Route resolution and random route extraction.
//!
//! Routes are not stored explicitly: route `k` of a depot is the run of
//! entries between separator `k-1` (exclusive) and separator `k`. For
//! `k = 0` it starts at index 0.

use rand::Rng;
use tracing::trace;

use crate::error::{MdvrpError, MdvrpResult};
use crate::models::{Chromosome, Customer, Depot};

/// Index range of one route inside a depot sequence.
///
/// `start..end` covers the route's real customers; `end` is the position of
/// the separator closing the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpan {
    /// First index of the route.
    pub start: usize,
    /// Index of the closing separator.
    pub end: usize,
}

impl RouteSpan {
    /// Number of real customers in the route.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the route serves no customer.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A copy of one route's entries plus the span it was read from.
#[derive(Debug, Clone)]
pub struct RouteSlice {
    /// Route entries, optionally ending with the separator.
    pub customers: Vec<Customer>,
    /// First index of the route in the depot.
    pub start: usize,
    /// Index of the closing separator in the depot.
    pub end: usize,
}

/// A route removed (or copied) from a random depot of a chromosome.
#[derive(Debug, Clone)]
pub struct ExtractedRoute {
    /// Route entries ending with the separator.
    pub customers: Vec<Customer>,
    /// Depot the route came from.
    pub depot_index: usize,
    /// First index of the route in the depot before extraction.
    pub start: usize,
    /// Index of the closing separator before extraction.
    pub end: usize,
}

impl ExtractedRoute {
    /// The route's real customers, without the trailing separator.
    pub fn into_customers(self) -> Vec<Customer> {
        self.customers
            .into_iter()
            .filter(|c| !c.is_separator())
            .collect()
    }
}

/// Resolves the span of route `route_index`.
pub fn route_span(depot: &Depot, route_index: usize) -> MdvrpResult<RouteSpan> {
    let ends = depot.route_ending_indices();
    let end = *ends
        .get(route_index)
        .ok_or(MdvrpError::RouteIndexOutOfRange {
            index: route_index,
            count: ends.len(),
        })?;
    let start = match route_index {
        0 => 0,
        k => ends[k - 1] + 1,
    };
    Ok(RouteSpan { start, end })
}

/// Spans of every route in the depot, in order.
pub fn route_spans(depot: &Depot) -> impl Iterator<Item = RouteSpan> + '_ {
    let ends = depot.route_ending_indices();
    ends.iter().enumerate().map(move |(k, &end)| RouteSpan {
        start: if k == 0 { 0 } else { ends[k - 1] + 1 },
        end,
    })
}

/// Copies route `route_index` out of the depot.
///
/// With `include_separator` the closing separator is appended to the
/// returned entries.
///
/// # Errors
///
/// [`MdvrpError::RouteIndexOutOfRange`] if the depot has no such route.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Customer, Depot};
/// use u_mdvrp::ga::route_at;
///
/// let mut depot = Depot::new(1, 0.0, 0.0, 10.0);
/// for (id, q) in [(1, 4.0), (2, 5.0), (3, 3.0)] {
///     depot.push(Customer::new(id, 0.0, 0.0, q));
/// }
/// depot.insert(2, depot.new_separator());
/// depot.push(depot.new_separator());
///
/// let second = route_at(&depot, 1, false).unwrap();
/// assert_eq!((second.start, second.end), (3, 4));
/// assert_eq!(second.customers.len(), 1);
/// assert!(route_at(&depot, 2, false).is_err());
/// ```
pub fn route_at(depot: &Depot, route_index: usize, include_separator: bool) -> MdvrpResult<RouteSlice> {
    let span = route_span(depot, route_index)?;
    let upto = if include_separator { span.end + 1 } else { span.end };
    Ok(RouteSlice {
        customers: depot.customers()[span.start..upto].to_vec(),
        start: span.start,
        end: span.end,
    })
}

/// Picks a random route of a random depot and returns its entries.
///
/// The depot is drawn uniformly among depots holding at least one route,
/// then the route uniformly within it. With `delete` the whole span,
/// separator included, is removed from the depot.
///
/// # Errors
///
/// [`MdvrpError::NoRoutes`] if no depot holds a route.
pub fn extract_random_route<R: Rng>(
    chromosome: &mut Chromosome,
    delete: bool,
    rng: &mut R,
) -> MdvrpResult<ExtractedRoute> {
    let routable: Vec<usize> = chromosome
        .iter()
        .enumerate()
        .filter(|(_, d)| d.route_count() > 0)
        .map(|(i, _)| i)
        .collect();
    if routable.is_empty() {
        return Err(MdvrpError::NoRoutes);
    }

    let depot_index = routable[rng.random_range(0..routable.len())];
    let depot = chromosome
        .get_mut(depot_index)
        .ok_or(MdvrpError::NoRoutes)?;
    let route_index = rng.random_range(0..depot.route_count());
    let slice = route_at(depot, route_index, true)?;

    if delete {
        // Back to front so earlier indices stay valid.
        for index in (slice.start..=slice.end).rev() {
            depot.remove_at(index);
        }
    }

    trace!(
        depot_index,
        route_index,
        start = slice.start,
        end = slice.end,
        delete,
        "extracted route"
    );

    Ok(ExtractedRoute {
        customers: slice.customers,
        depot_index,
        start: slice.start,
        end: slice.end,
    })
}
