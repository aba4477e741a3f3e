//! Depot: a capacity-limited facility holding routes back to back.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Customer;
use crate::distance::Located;

/// A depot and the ordered sequence of entries it serves.
///
/// The sequence holds real customers and separators. Each separator closes
/// one route, so after routing the sequence always ends with a separator.
/// The positions of all separators are cached and kept in sync by every
/// mutating method; the cache is never exposed for mutation.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Customer, Depot};
///
/// let mut depot = Depot::new(51, 20.0, 20.0, 80.0);
/// depot.push(Customer::new(1, 37.0, 52.0, 7.0));
/// depot.push(depot.new_separator());
/// depot.insert(0, Customer::new(2, 49.0, 49.0, 30.0));
///
/// assert_eq!(depot.len(), 3);
/// assert_eq!(depot.route_ending_indices(), &[2]);
/// assert_eq!(depot.used_capacity(), 37.0);
/// ```
#[derive(Debug, Clone)]
pub struct Depot {
    id: usize,
    x: f64,
    y: f64,
    capacity: f64,
    customers: Vec<Customer>,
    separators: Vec<usize>,
}

impl Depot {
    /// Creates a depot with an empty sequence.
    pub fn new(id: usize, x: f64, y: f64, capacity: f64) -> Self {
        Self {
            id,
            x,
            y,
            capacity,
            customers: Vec::new(),
            separators: Vec::new(),
        }
    }

    /// Depot id.
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

    /// Maximum demand a single route may carry.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub(crate) fn set_capacity(&mut self, capacity: f64) {
        self.capacity = capacity;
    }

    /// A fresh separator located at this depot.
    pub fn new_separator(&self) -> Customer {
        Customer::separator(self.x, self.y)
    }

    /// Number of entries, separators included.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if the sequence holds no entries.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    /// All entries in order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Iterates over entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Customer> {
        self.customers.iter()
    }

    /// Sorted positions of all separators, one per route.
    pub fn route_ending_indices(&self) -> &[usize] {
        &self.separators
    }

    /// Number of routes (separators) in the sequence.
    pub fn route_count(&self) -> usize {
        self.separators.len()
    }

    /// Total demand over all entries; separators contribute nothing.
    pub fn used_capacity(&self) -> f64 {
        self.customers.iter().map(Customer::demand).sum()
    }

    /// Returns `true` if this exact entry (by identity) is in the sequence.
    pub fn contains(&self, customer: &Customer) -> bool {
        self.index_of(customer).is_some()
    }

    /// Position of this exact entry (by identity).
    pub fn index_of(&self, customer: &Customer) -> Option<usize> {
        self.customers.iter().position(|c| c.same_as(customer))
    }

    /// Appends an entry.
    pub fn push(&mut self, customer: Customer) {
        if customer.is_separator() {
            self.separators.push(self.customers.len());
        }
        self.customers.push(customer);
    }

    /// Inserts an entry at `index`, shifting later entries right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, customer: Customer) {
        for pos in self.separators.iter_mut().filter(|p| **p >= index) {
            *pos += 1;
        }
        if customer.is_separator() {
            let at = self.separators.partition_point(|&p| p < index);
            self.separators.insert(at, index);
        }
        self.customers.insert(index, customer);
    }

    /// Removes the entry at `index`, returning it, or `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Customer> {
        if index >= self.customers.len() {
            return None;
        }
        let removed = self.customers.remove(index);
        if removed.is_separator() {
            self.separators.retain(|&p| p != index);
        }
        for pos in self.separators.iter_mut().filter(|p| **p > index) {
            *pos -= 1;
        }
        Some(removed)
    }

    /// Removes this exact entry (by identity). Returns `false` if absent.
    pub fn remove(&mut self, customer: &Customer) -> bool {
        match self.index_of(customer) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.customers.clear();
        self.separators.clear();
    }

    /// Removes all separators, leaving only real customers in order.
    pub fn strip_separators(&mut self) {
        self.customers.retain(|c| !c.is_separator());
        self.separators.clear();
    }

    /// Drops all separators and shuffles the remaining customers.
    pub fn shuffle_customers<R: Rng>(&mut self, rng: &mut R) {
        self.strip_separators();
        self.customers.shuffle(rng);
    }
}

impl Located for Depot {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl<'a> IntoIterator for &'a Depot {
    type Item = &'a Customer;
    type IntoIter = std::slice::Iter<'a, Customer>;

    fn into_iter(self) -> Self::IntoIter {
        self.customers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn separator_positions(depot: &Depot) -> Vec<usize> {
        depot
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_separator())
            .map(|(i, _)| i)
            .collect()
    }

    fn sample_depot() -> Depot {
        let mut d = Depot::new(0, 20.0, 30.0, 200.0);
        for i in 1..=4 {
            d.push(Customer::new(i, i as f64, i as f64, 10.0 * i as f64));
        }
        d
    }

    #[test]
    fn test_depot_new() {
        let d = Depot::new(51, 20.0, 30.0, 80.0);
        assert_eq!(d.id(), 51);
        assert_eq!(d.capacity(), 80.0);
        assert!(d.is_empty());
        assert!(d.route_ending_indices().is_empty());
    }

    #[test]
    fn test_push_and_used_capacity() {
        let mut d = sample_depot();
        assert_eq!(d.len(), 4);
        assert_eq!(d.used_capacity(), 100.0);
        d.push(d.new_separator());
        assert_eq!(d.used_capacity(), 100.0);
        assert_eq!(d.route_ending_indices(), &[4]);
    }

    #[test]
    fn test_contains_and_index_by_identity() {
        let mut d = sample_depot();
        let c = Customer::new(99, 5.0, 5.0, 1.0);
        let twin = Customer::new(99, 5.0, 5.0, 1.0);
        d.push(c.clone());
        assert!(d.contains(&c));
        assert!(!d.contains(&twin));
        assert_eq!(d.index_of(&c), Some(4));
        assert!(!d.remove(&twin));
        assert!(d.remove(&c));
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn test_insert_customer_shifts_separators() {
        let mut d = sample_depot();
        d.insert(2, d.new_separator());
        d.push(d.new_separator());
        assert_eq!(d.route_ending_indices(), &[2, 5]);

        d.insert(0, Customer::new(7, 0.0, 0.0, 1.0));
        assert_eq!(d.route_ending_indices(), &[3, 6]);

        // Inserting at a separator's position pushes it right.
        d.insert(3, Customer::new(8, 0.0, 0.0, 1.0));
        assert_eq!(d.route_ending_indices(), &[4, 7]);
        assert_eq!(d.route_ending_indices(), separator_positions(&d).as_slice());
    }

    #[test]
    fn test_insert_separator_keeps_order() {
        let mut d = sample_depot();
        d.push(d.new_separator());
        d.insert(1, d.new_separator());
        assert_eq!(d.route_ending_indices(), &[1, 5]);
        d.insert(3, d.new_separator());
        assert_eq!(d.route_ending_indices(), &[1, 3, 6]);
        assert_eq!(d.route_ending_indices(), separator_positions(&d).as_slice());
    }

    #[test]
    fn test_remove_at_shifts_separators() {
        let mut d = sample_depot();
        d.insert(2, d.new_separator());
        d.push(d.new_separator());
        // [c1, c2, S, c3, c4, S]
        let removed = d.remove_at(0).expect("in range");
        assert_eq!(removed.id(), 1);
        assert_eq!(d.route_ending_indices(), &[1, 4]);

        let sep = d.remove_at(1).expect("in range");
        assert!(sep.is_separator());
        assert_eq!(d.route_ending_indices(), &[3]);
        assert_eq!(d.route_ending_indices(), separator_positions(&d).as_slice());
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut d = sample_depot();
        assert!(d.remove_at(10).is_none());
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn test_remove_separator_by_identity() {
        let mut d = sample_depot();
        let sep = d.new_separator();
        d.insert(2, sep.clone());
        d.push(d.new_separator());
        assert!(d.remove(&sep));
        assert_eq!(d.route_ending_indices(), &[4]);
    }

    #[test]
    fn test_clear() {
        let mut d = sample_depot();
        d.push(d.new_separator());
        d.clear();
        assert_eq!(d.len(), 0);
        assert!(d.route_ending_indices().is_empty());
    }

    #[test]
    fn test_shuffle_keeps_customers_and_drops_separators() {
        let mut d = sample_depot();
        d.insert(2, d.new_separator());
        d.push(d.new_separator());
        let target = d.get(3).expect("entry").clone();
        let mut rng = create_rng(42);
        d.shuffle_customers(&mut rng);
        assert_eq!(d.len(), 4);
        assert!(d.contains(&target));
        assert!(d.iter().all(|c| !c.is_separator()));
        assert!(d.route_ending_indices().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut d = sample_depot();
        d.push(d.new_separator());
        let mut copy = d.clone();
        copy.remove_at(0);
        copy.insert(0, copy.new_separator());
        assert_eq!(d.len(), 5);
        assert_eq!(d.route_ending_indices(), &[4]);
        assert_eq!(copy.route_ending_indices(), &[0, 4]);
    }
}
