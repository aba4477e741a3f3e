//! Customer and route-separator entries.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::distance::Located;

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

fn next_key() -> u64 {
    NEXT_KEY.fetch_add(1, Ordering::Relaxed)
}

/// Domain id given to every separator.
pub const SEPARATOR_ID: usize = 0;

/// A customer to be served, or a separator marking the end of a route.
///
/// Every value carries an identity key assigned at construction. Depot
/// containment and removal compare keys, not field values, so a real
/// customer and a separator sharing the same `id` stay distinguishable.
/// Cloning keeps the key: a clone is the same customer seen from another
/// chromosome.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::Customer;
///
/// let c = Customer::new(7, 37.0, 52.0, 7.0);
/// assert_eq!(c.id(), 7);
/// assert!(!c.is_separator());
///
/// let sep = Customer::separator(20.0, 20.0);
/// assert!(sep.is_separator());
/// assert_eq!(sep.demand(), 0.0);
/// assert!(!sep.same_as(&Customer::separator(20.0, 20.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Customer {
    key: u64,
    id: usize,
    x: f64,
    y: f64,
    demand: f64,
    is_separator: bool,
}

impl Customer {
    /// Creates a real customer.
    pub fn new(id: usize, x: f64, y: f64, demand: f64) -> Self {
        Self {
            key: next_key(),
            id,
            x,
            y,
            demand,
            is_separator: false,
        }
    }

    /// Creates a separator located at its depot's coordinates.
    pub fn separator(x: f64, y: f64) -> Self {
        Self {
            key: next_key(),
            id: SEPARATOR_ID,
            x,
            y,
            demand: 0.0,
            is_separator: true,
        }
    }

    /// Rebuilds an entry from serialized fields, with a fresh identity.
    pub(crate) fn from_parts(id: usize, x: f64, y: f64, demand: f64, is_separator: bool) -> Self {
        Self {
            key: next_key(),
            id,
            x,
            y,
            demand,
            is_separator,
        }
    }

    /// Identity key.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Domain id (separators use [`SEPARATOR_ID`]).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Demand served at this customer (0 for separators).
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Returns `true` for route separators.
    pub fn is_separator(&self) -> bool {
        self.is_separator
    }

    /// Returns `true` if both values are the same entry (same identity key).
    pub fn same_as(&self, other: &Customer) -> bool {
        self.key == other.key
    }
}

impl Located for Customer {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}
