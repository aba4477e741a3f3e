//! Domain model types for the multi-depot routing problem.
//!
//! Provides the chromosome encoding: customers (and separator sentinels),
//! depots holding routes back to back, chromosomes made of depots, and
//! populations of chromosomes.

mod chromosome;
mod customer;
mod depot;
mod population;

pub use chromosome::{Chromosome, UNEVALUATED};
pub use customer::{Customer, SEPARATOR_ID};
pub use depot::Depot;
pub use population::Population;
