//! Chromosome: one candidate solution as a list of routed depots.

use super::Depot;
use crate::evaluation;

/// Fitness value of a chromosome that has not been evaluated yet.
pub const UNEVALUATED: f64 = -1.0;

/// A candidate MDVRP solution: one [`Depot`] per problem depot, all sharing
/// the chromosome's capacity.
///
/// Fitness is cached. Structural changes do not reset it, so callers must
/// call [`evaluate`](Self::evaluate) after mutating depots and before
/// reading [`fitness`](Self::fitness). Lower fitness is better.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Chromosome, Customer, Depot};
///
/// let mut depot = Depot::new(1, 0.0, 0.0, 99.0);
/// depot.push(Customer::new(1, 3.0, 4.0, 5.0));
/// depot.push(depot.new_separator());
///
/// let mut ch = Chromosome::new(0, 10.0, vec![depot]);
/// assert_eq!(ch.depots()[0].capacity(), 10.0);
/// assert!(!ch.is_evaluated());
///
/// // depot -> customer -> depot = 10, plus one route
/// assert!((ch.evaluate() - 11.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Chromosome {
    id: usize,
    capacity: f64,
    fitness: f64,
    depots: Vec<Depot>,
}

impl Chromosome {
    /// Creates an unevaluated chromosome, overriding every depot's capacity
    /// with `capacity`.
    pub fn new(id: usize, capacity: f64, mut depots: Vec<Depot>) -> Self {
        for depot in &mut depots {
            depot.set_capacity(capacity);
        }
        Self {
            id,
            capacity,
            fitness: UNEVALUATED,
            depots,
        }
    }

    /// Chromosome id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Capacity shared by all depots.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Cached fitness, [`UNEVALUATED`] until [`evaluate`](Self::evaluate) runs.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Overrides the cached fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Returns `true` once a fitness value has been computed or assigned.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != UNEVALUATED
    }

    /// Computes total route distance plus route count, caches and returns it.
    pub fn evaluate(&mut self) -> f64 {
        self.fitness = evaluation::fitness(self);
        self.fitness
    }

    /// Depots in order.
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Mutable access to the depots.
    pub fn depots_mut(&mut self) -> &mut [Depot] {
        &mut self.depots
    }

    /// Depot at `index`.
    pub fn get(&self, index: usize) -> Option<&Depot> {
        self.depots.get(index)
    }

    /// Mutable depot at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Depot> {
        self.depots.get_mut(index)
    }

    /// Iterates over depots.
    pub fn iter(&self) -> std::slice::Iter<'_, Depot> {
        self.depots.iter()
    }

    /// Number of depots.
    pub fn len(&self) -> usize {
        self.depots.len()
    }

    /// Returns `true` if the chromosome has no depots.
    pub fn is_empty(&self) -> bool {
        self.depots.is_empty()
    }

    /// Appends a depot, aligning its capacity with the chromosome's.
    pub fn push(&mut self, mut depot: Depot) {
        depot.set_capacity(self.capacity);
        self.depots.push(depot);
    }

    /// Inserts a depot at `index`, aligning its capacity.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, mut depot: Depot) {
        depot.set_capacity(self.capacity);
        self.depots.insert(index, depot);
    }

    /// Removes the depot at `index`, or returns `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Depot> {
        (index < self.depots.len()).then(|| self.depots.remove(index))
    }

    /// Demand used by each depot.
    pub fn used_capacity(&self) -> Vec<f64> {
        self.depots.iter().map(Depot::used_capacity).collect()
    }

    /// Total number of routes across all depots.
    pub fn route_count(&self) -> usize {
        self.depots.iter().map(Depot::route_count).sum()
    }

    /// Number of real (non-separator) customers across all depots.
    pub fn customer_count(&self) -> usize {
        self.depots
            .iter()
            .flat_map(Depot::iter)
            .filter(|c| !c.is_separator())
            .count()
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a Depot;
    type IntoIter = std::slice::Iter<'a, Depot>;

    fn into_iter(self) -> Self::IntoIter {
        self.depots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;

    fn routed_depot(id: usize, x: f64, y: f64, demands: &[f64]) -> Depot {
        let mut d = Depot::new(id, x, y, 100.0);
        for (i, &q) in demands.iter().enumerate() {
            d.push(Customer::new(id * 100 + i + 1, x + 1.0 + i as f64, y, q));
        }
        d.push(d.new_separator());
        d
    }

    #[test]
    fn test_new_aligns_capacity() {
        let ch = Chromosome::new(
            0,
            200.0,
            vec![routed_depot(1, 0.0, 0.0, &[1.0]), routed_depot(2, 5.0, 5.0, &[2.0])],
        );
        assert_eq!(ch.id(), 0);
        assert_eq!(ch.len(), 2);
        assert!(ch.iter().all(|d| d.capacity() == 200.0));
        assert_eq!(ch.fitness(), UNEVALUATED);
    }

    #[test]
    fn test_used_capacity_per_depot() {
        let ch = Chromosome::new(
            0,
            200.0,
            vec![routed_depot(1, 0.0, 0.0, &[1.0, 4.0]), routed_depot(2, 5.0, 5.0, &[2.0])],
        );
        assert_eq!(ch.used_capacity(), vec![5.0, 2.0]);
        assert_eq!(ch.customer_count(), 3);
        assert_eq!(ch.route_count(), 2);
    }

    #[test]
    fn test_evaluate_caches() {
        let mut ch = Chromosome::new(0, 200.0, vec![routed_depot(1, 0.0, 0.0, &[1.0, 4.0])]);
        let f = ch.evaluate();
        assert!(ch.is_evaluated());
        assert_eq!(ch.fitness(), f);
        // 0 -> 1 -> 2 -> 0 along the x axis = 4, plus one route
        assert!((f - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_container_ops() {
        let mut ch = Chromosome::new(0, 50.0, vec![routed_depot(1, 0.0, 0.0, &[1.0])]);
        ch.push(routed_depot(2, 0.0, 0.0, &[1.0]));
        assert_eq!(ch.len(), 2);
        assert_eq!(ch.get(1).map(Depot::capacity), Some(50.0));

        ch.insert(0, routed_depot(3, 0.0, 0.0, &[1.0]));
        assert_eq!(ch.get(0).map(Depot::id), Some(3));

        assert_eq!(ch.remove_at(0).map(|d| d.id()), Some(3));
        assert!(ch.remove_at(10).is_none());
        assert_eq!(ch.len(), 2);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut ch = Chromosome::new(0, 50.0, vec![routed_depot(1, 0.0, 0.0, &[1.0, 2.0])]);
        let copy = ch.clone();
        ch.get_mut(0).expect("depot").remove_at(0);
        assert_eq!(copy.depots()[0].len(), 3);
        assert_eq!(ch.depots()[0].len(), 2);
    }
}
