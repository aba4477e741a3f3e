//! Genetic algorithm configuration.

use serde::{Deserialize, Serialize};

use super::selection::{DEFAULT_TOURNAMENT_PROBABILITY, DEFAULT_TOURNAMENT_SIZE};
use crate::error::{MdvrpError, MdvrpResult};

/// Hyper-parameters of a GA run.
///
/// # Examples
///
/// ```
/// use u_mdvrp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(50)
///     .with_seed(7);
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.tournament_size, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of chromosomes kept each generation.
    pub population_size: usize,
    /// Number of generation steps to run.
    pub generations: usize,
    /// Probability of a fitness-driven tournament.
    pub tournament_probability: f64,
    /// Chromosomes drawn per tournament sample.
    pub tournament_size: usize,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 100,
            tournament_probability: DEFAULT_TOURNAMENT_PROBABILITY,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament probability.
    pub fn with_tournament_probability(mut self, p: f64) -> Self {
        self.tournament_probability = p;
        self
    }

    /// Sets the tournament sample size.
    pub fn with_tournament_size(mut self, n: usize) -> Self {
        self.tournament_size = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the parameters describe a runnable configuration.
    ///
    /// # Errors
    ///
    /// [`MdvrpError::InvalidConfig`] if the probability is outside `[0, 1]`,
    /// the tournament size is below 2, or the population cannot supply a
    /// tournament sample.
    pub fn validate(&self) -> MdvrpResult<()> {
        if !(0.0..=1.0).contains(&self.tournament_probability) {
            return Err(MdvrpError::InvalidConfig(format!(
                "tournament_probability must be within [0, 1], got {}",
                self.tournament_probability
            )));
        }
        if self.tournament_size < 2 {
            return Err(MdvrpError::InvalidConfig(format!(
                "tournament_size must be at least 2, got {}",
                self.tournament_size
            )));
        }
        if self.population_size == 0 {
            return Err(MdvrpError::InvalidConfig("population_size must be positive".into()));
        }
        if self.population_size > 1 && self.tournament_size > self.population_size {
            return Err(MdvrpError::InvalidConfig(format!(
                "tournament_size {} exceeds population_size {}",
                self.tournament_size, self.population_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GaConfig::default();
        assert_eq!(c.population_size, 10);
        assert_eq!(c.generations, 100);
        assert_eq!(c.tournament_probability, 0.8);
        assert_eq!(c.tournament_size, 2);
        assert!(c.seed.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let c = GaConfig::default()
            .with_population_size(30)
            .with_generations(5)
            .with_tournament_probability(0.5)
            .with_tournament_size(3)
            .with_seed(99);
        assert_eq!(c.population_size, 30);
        assert_eq!(c.generations, 5);
        assert_eq!(c.tournament_probability, 0.5);
        assert_eq!(c.tournament_size, 3);
        assert_eq!(c.seed, Some(99));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GaConfig::default().with_tournament_probability(1.5).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(1).validate().is_err());
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
        assert!(GaConfig::default()
            .with_population_size(3)
            .with_tournament_size(4)
            .validate()
            .is_err());
        assert!(GaConfig::default().with_population_size(1).validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip_with_defaults() {
        let c: GaConfig = serde_json::from_str(r#"{"population_size": 40, "seed": 3}"#)
            .expect("valid json");
        assert_eq!(c.population_size, 40);
        assert_eq!(c.generations, 100);
        assert_eq!(c.seed, Some(3));

        let json = serde_json::to_string(&c).expect("serializable");
        let back: GaConfig = serde_json::from_str(&json).expect("valid json");
        assert_eq!(back, c);
    }
}
