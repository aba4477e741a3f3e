//! Population: an ordered collection of chromosomes.

use super::Chromosome;

/// An ordered collection of [`Chromosome`]s.
///
/// Order is insertion order. After a generation step index 0 holds the
/// elite carried over from the previous generation.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Chromosome, Population};
///
/// let mut pop = Population::new(0);
/// let mut a = Chromosome::new(1, 10.0, vec![]);
/// a.set_fitness(7.0);
/// let mut b = Chromosome::new(2, 10.0, vec![]);
/// b.set_fitness(3.0);
/// pop.push(a);
/// pop.push(b);
///
/// assert_eq!(pop.len(), 2);
/// assert_eq!(pop.best().map(|c| c.id()), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Population {
    id: usize,
    chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Creates an empty population.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            chromosomes: Vec::new(),
        }
    }

    /// Creates a population from existing chromosomes.
    pub fn with_chromosomes(id: usize, chromosomes: Vec<Chromosome>) -> Self {
        Self { id, chromosomes }
    }

    /// Population id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Returns `true` if the population holds no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Chromosome at `index`.
    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.chromosomes.get(index)
    }

    /// Mutable chromosome at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Chromosome> {
        self.chromosomes.get_mut(index)
    }

    /// All chromosomes in order.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Iterates over chromosomes.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    /// Iterates mutably over chromosomes.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Chromosome> {
        self.chromosomes.iter_mut()
    }

    /// Appends a chromosome.
    pub fn push(&mut self, chromosome: Chromosome) {
        self.chromosomes.push(chromosome);
    }

    /// Inserts a chromosome at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, chromosome: Chromosome) {
        self.chromosomes.insert(index, chromosome);
    }

    /// Removes the chromosome at `index`, or returns `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Chromosome> {
        (index < self.chromosomes.len()).then(|| self.chromosomes.remove(index))
    }

    /// Removes and returns the most recently added chromosome.
    pub fn pop(&mut self) -> Option<Chromosome> {
        self.chromosomes.pop()
    }

    /// Removes every chromosome.
    pub fn clear(&mut self) {
        self.chromosomes.clear();
    }

    /// Re-evaluates every chromosome's fitness.
    pub fn evaluate_all(&mut self) {
        for chromosome in &mut self.chromosomes {
            chromosome.evaluate();
        }
    }

    /// The chromosome with the lowest cached fitness (first on ties).
    pub fn best(&self) -> Option<&Chromosome> {
        self.chromosomes
            .iter()
            .reduce(|best, c| if c.fitness() < best.fitness() { c } else { best })
    }

    /// Consumes the population, returning its chromosomes.
    pub fn into_chromosomes(self) -> Vec<Chromosome> {
        self.chromosomes
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

impl IntoIterator for Population {
    type Item = Chromosome;
    type IntoIter = std::vec::IntoIter<Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.into_iter()
    }
}
