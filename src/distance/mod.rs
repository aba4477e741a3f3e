//! Euclidean distance between point-bearing entities.
//!
//! Customers, separators, and depots all expose planar coordinates through
//! [`Located`]; every leg in the fitness and insertion computations is a
//! straight-line distance between two such points.

mod euclidean;

pub use euclidean::{euclidean_distance, nearest, Located};
