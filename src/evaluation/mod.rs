//! Chromosome cost evaluation.

mod fitness;

pub use fitness::{breakdown, fitness, route_distance, FitnessBreakdown};
