//! Reading benchmark instances and reading/writing chromosomes.
//!
//! Instances use the Cordeau MDVRP text layout: a header line, one
//! `duration capacity` line per depot, one line per customer, then one
//! coordinate line per depot. Chromosomes are stored as plain text with a
//! depot header line followed by that depot's entries.

mod reader;
mod writer;

pub use reader::{
    load_chromosome, parse_chromosome, parse_instance, read_best_known, read_instance, Instance,
};
pub use writer::{save_chromosome, write_chromosome};
