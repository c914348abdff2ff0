//! Gradient descent configuration.

use super::schedule::LearningRateSchedule;
use crate::error::{require_positive, Result};

/// Configuration for scheduled-learning-rate gradient descent.
///
/// # Examples
///
/// ```
/// use u_landscape::gd::GdConfig;
///
/// let config = GdConfig::default()
///     .with_theta_init(3.0)
///     .with_max_iterations(1000)
///     .with_gradient_tolerance(1e-8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GdConfig {
    /// Starting point.
    pub theta_init: f64,

    /// Maximum number of parameter updates. Also the schedule length.
    pub max_iterations: usize,

    /// The run stops once `|gradient| < gradient_tolerance`.
    pub gradient_tolerance: f64,

    /// Denominator of the first learning rate.
    pub min_denom: f64,

    /// Denominator of the last learning rate.
    pub max_denom: f64,
}

impl Default for GdConfig {
    fn default() -> Self {
        Self {
            theta_init: 0.0,
            max_iterations: 500,
            gradient_tolerance: 1e-6,
            min_denom: 50.0,
            max_denom: 200.0,
        }
    }
}

impl GdConfig {
    pub fn with_theta_init(mut self, theta: f64) -> Self {
        self.theta_init = theta;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_gradient_tolerance(mut self, tol: f64) -> Self {
        self.gradient_tolerance = tol;
        self
    }

    /// Sets both schedule denominators.
    pub fn with_denominators(mut self, min_denom: f64, max_denom: f64) -> Self {
        self.min_denom = min_denom;
        self.max_denom = max_denom;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        require_positive("gradient_tolerance", self.gradient_tolerance)?;
        self.schedule().map(|_| ())
    }

    /// Builds the learning-rate schedule this configuration describes.
    pub fn schedule(&self) -> Result<LearningRateSchedule> {
        LearningRateSchedule::new(self.min_denom, self.max_denom, self.max_iterations)
    }
}
