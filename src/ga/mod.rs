//! Genetic algorithm over separator-encoded MDVRP chromosomes.
//!
//! - [`route`]: route spans and random route extraction
//! - [`routing`]: capacity-driven route segmentation
//! - [`insertion`]: cheapest-insertion repair
//! - [`crossover`]: route-exchange crossover
//! - [`selection`]: tournament selection and fittest lookup
//! - [`next_generation`]: one elitist generation step
//! - [`GaRunner`]: full run driven by a [`GaConfig`]

mod config;
pub mod crossover;
mod evolution;
pub mod insertion;
pub mod route;
pub mod routing;
mod runner;
mod seeding;
pub mod selection;

pub use config::GaConfig;
pub use crossover::{crossover, CrossoverOutcome};
pub use evolution::next_generation;
pub use insertion::{insert_customer, Insertion};
pub use route::{
    extract_random_route, route_at, route_span, route_spans, ExtractedRoute, RouteSlice, RouteSpan,
};
pub use routing::{initial_routing, initialize_population_routing, initialize_routing, randomize_customers};
pub use runner::{GaResult, GaRunner, RunSummary};
pub use seeding::{generate_chromosome_sample, generate_initial_population};
pub use selection::{
    extract_population, fittest_chromosome, tournament, DEFAULT_TOURNAMENT_PROBABILITY,
    DEFAULT_TOURNAMENT_SIZE,
};
