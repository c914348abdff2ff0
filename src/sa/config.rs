//! SA configuration and cooling schedule.

use crate::error::{require_finite, require_positive, Result};

/// Configuration for Simulated Annealing with a linear inverse-temperature
/// ramp.
///
/// Step `i` runs at `beta_i = beta_init + i * delta_beta`. A positive
/// `delta_beta` is cooling: uphill moves become less likely as the run
/// progresses. `beta_init = 0` starts at infinite temperature, where every
/// move is accepted.
///
/// # Examples
///
/// ```
/// use u_landscape::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_theta_init(3.0)
///     .with_beta_init(0.5)
///     .with_delta_beta(0.02)
///     .with_sigma(0.5)
///     .with_num_steps(200)
///     .with_seed(7);
/// assert_eq!(config.beta_at_step(100), 0.5 + 100.0 * 0.02);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting point.
    pub theta_init: f64,

    /// Inverse temperature of the first step.
    pub beta_init: f64,

    /// Increase of `beta` after every step.
    pub delta_beta: f64,

    /// Standard deviation of the Gaussian proposal.
    pub sigma: f64,

    /// Number of proposals. The trajectory holds `num_steps + 1` states.
    pub num_steps: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            theta_init: 0.0,
            beta_init: 0.5,
            delta_beta: 0.02,
            sigma: 0.5,
            num_steps: 200,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_theta_init(mut self, theta: f64) -> Self {
        self.theta_init = theta;
        self
    }

    pub fn with_beta_init(mut self, beta: f64) -> Self {
        self.beta_init = beta;
        self
    }

    pub fn with_delta_beta(mut self, delta: f64) -> Self {
        self.delta_beta = delta;
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

    /// Inverse temperature in effect at step `step`.
    ///
    /// Computed from the step index rather than accumulated, so
    /// `beta_at_step(i) == beta_init + i * delta_beta` holds exactly.
    pub fn beta_at_step(&self, step: usize) -> f64 {
        self.beta_init + step as f64 * self.delta_beta
    }

    /// Inverse temperature after the last step.
    pub fn final_beta(&self) -> f64 {
        self.beta_at_step(self.num_steps)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        require_finite("beta_init", self.beta_init)?;
        require_finite("delta_beta", self.delta_beta)?;
        require_positive("sigma", self.sigma)?;
        require_finite("final beta", self.final_beta())?;
        Ok(())
    }
}
