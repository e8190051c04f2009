//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// Configuration for one annealing search.
///
/// There are deliberately no temperature knobs: the acceptance policy cools
/// on the fixed `1 / iteration` clock, so the only tunables are the iteration
/// ceiling and the RNG seed.
///
/// # Examples
///
/// ```
/// use sa_balance::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_iterations(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaConfig {
    /// Hard ceiling on loop iterations. Must be at least 1.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), MappingError> {
        if self.max_iterations == 0 {
            return Err(MappingError::NonPositiveMaxIterations);
        }
        Ok(())
    }
}
