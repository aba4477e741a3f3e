//! Error type shared by the genetic operators and the instance I/O.

use std::fmt;

/// Errors raised by route extraction, population sampling, configuration,
/// and instance/solution I/O.
///
/// Capacity infeasibility is never an error: cheapest insertion always
/// resolves it by opening a new route.
#[derive(Debug, Clone, PartialEq)]
pub enum MdvrpError {
    /// A route index was requested beyond the routes a depot holds.
    RouteIndexOutOfRange {
        /// Requested route index.
        index: usize,
        /// Number of routes in the depot.
        count: usize,
    },
    /// No depot of the chromosome holds a route to extract.
    NoRoutes,
    /// More distinct members were requested than the population contains.
    SampleTooLarge {
        /// Requested sample size.
        requested: usize,
        /// Population size.
        available: usize,
    },
    /// Crossover needs exactly two parents.
    InvalidParents {
        /// Number of chromosomes actually supplied.
        count: usize,
    },
    /// A chromosome has no depot to receive customers.
    NoDepots,
    /// A file could not be opened, read, or written.
    Io {
        /// Path involved in the failure.
        path: String,
        /// Underlying error message.
        message: String,
    },
    /// A line did not parse into the expected numeric fields.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// A configuration value is outside its valid range.
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type MdvrpResult<T> = Result<T, MdvrpError>;

impl MdvrpError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for MdvrpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteIndexOutOfRange { index, count } => write!(
                f,
                "route index {index} out of range: depot has {count} route(s), valid range is 0..{count}"
            ),
            Self::NoRoutes => write!(f, "chromosome has no routes to extract"),
            Self::SampleTooLarge {
                requested,
                available,
            } => write!(
                f,
                "cannot sample {requested} distinct chromosome(s) from a population of {available}"
            ),
            Self::InvalidParents { count } => {
                write!(f, "crossover needs exactly 2 parents, got {count}")
            }
            Self::NoDepots => write!(f, "chromosome has no depots"),
            Self::Io { path, message } => write!(f, "{path}: {message}"),
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
            Self::InvalidConfig(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for MdvrpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_index_message_names_range() {
        let err = MdvrpError::RouteIndexOutOfRange { index: 3, count: 2 };
        let msg = err.to_string();
        assert!(msg.contains("route index 3"));
        assert!(msg.contains("0..2"));
    }

    #[test]
    fn test_unit_variant_messages() {
        assert_eq!(MdvrpError::NoRoutes.to_string(), "chromosome has no routes to extract");
        assert_eq!(MdvrpError::NoDepots.to_string(), "chromosome has no depots");
    }

    #[test]
    fn test_parse_helper() {
        let err = MdvrpError::parse(4, "expected 5 fields");
        assert_eq!(
            err,
            MdvrpError::Parse {
                line: 4,
                message: "expected 5 fields".into()
            }
        );
        assert_eq!(err.to_string(), "line 4: expected 5 fields");
    }

    #[test]
    fn test_io_helper_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = MdvrpError::io("data/p01", io);
        assert!(err.to_string().starts_with("data/p01: "));
    }
}
