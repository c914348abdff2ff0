//! Metropolis–Hastings configuration.

use crate::error::{require_positive, Result};

/// Configuration for the fixed-temperature Metropolis–Hastings sampler.
///
/// # Examples
///
/// ```
/// use u_landscape::mcmc::MhConfig;
///
/// let config = MhConfig::default()
///     .with_theta_init(-1.0)
///     .with_beta(1.5)
///     .with_sigma(0.5)
///     .with_num_steps(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MhConfig {
    /// Starting point.
    pub theta_init: f64,

    /// Inverse temperature. Higher values reject uphill moves more often.
    pub beta: f64,

    /// Standard deviation of the Gaussian proposal.
    pub sigma: f64,

    /// Number of proposals. The trajectory holds `num_steps + 1` states.
    pub num_steps: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for MhConfig {
    fn default() -> Self {
        Self {
            theta_init: 0.0,
            beta: 1.5,
            sigma: 0.5,
            num_steps: 200,
            seed: None,
        }
    }
}

impl MhConfig {
    pub fn with_theta_init(mut self, theta: f64) -> Self {
        self.theta_init = theta;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_num_steps(mut self, n: usize) -> Self {
        self.num_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        require_positive("beta", self.beta)?;
        require_positive("sigma", self.sigma)?;
        Ok(())
    }
}
