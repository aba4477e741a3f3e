//! # u-mdvrp
//!
//! Multi-depot vehicle routing (MDVRP) with a route-segmentation genetic
//! algorithm.
//!
//! A chromosome holds one customer sequence per depot. Separator entries
//! split each sequence into capacity-feasible routes that start and end at
//! the depot. Evolution keeps the fittest chromosome, picks parents by
//! tournament, and exchanges whole routes between them, repairing the
//! offspring by cheapest insertion.
//!
//! ## Modules
//!
//! - [`models`]: customers, depots, chromosomes, and populations
//! - [`distance`]: Euclidean distance between located entities
//! - [`evaluation`]: fitness (total distance plus route count)
//! - [`ga`]: segmentation, insertion, crossover, selection, and the GA loop
//! - [`io`]: instance loading and chromosome persistence
//! - [`random`]: seeded random number generators
//!
//! ## Example
//!
//! ```
//! use u_mdvrp::ga::{GaConfig, GaRunner};
//! use u_mdvrp::io::parse_instance;
//!
//! let text = "\
//! 2 4 6 2
//! 0 20
//! 0 20
//! 1 10 12 0 6
//! 2 14 8 0 7
//! 3 3 15 0 5
//! 4 42 40 0 8
//! 5 47 36 0 4
//! 6 38 45 0 9
//! 51 10 10 0 0
//! 52 40 40 0 0
//! ";
//! let instance = parse_instance(text.as_bytes()).unwrap();
//! let config = GaConfig::default()
//!     .with_population_size(6)
//!     .with_generations(20)
//!     .with_seed(1);
//!
//! let result = GaRunner::run(&instance.depots, &instance.customers, &config).unwrap();
//! assert_eq!(result.best.customer_count(), 6);
//! assert!(result.best_fitness > 0.0);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod io;
pub mod models;
pub mod random;

pub use error::{MdvrpError, MdvrpResult};
