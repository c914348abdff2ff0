//! Gradient descent execution loop.

use super::config::GdConfig;
use crate::error::Result;
use crate::landscape::Landscape;
use crate::trajectory::Trajectory;

/// Why a gradient descent run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// `|gradient| < gradient_tolerance` at the final state.
    ConvergedSmallGradient,
    /// The gradient at the final state was `NaN` or infinite. The
    /// trajectory ends at the last state reached before the degeneracy.
    ConvergedNan,
    /// `max_iterations` updates were applied without meeting either
    /// stopping rule.
    MaxIterationsReached,
}

/// Result of a gradient descent run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GdResult {
    /// Every visited state, starting with `theta_init`.
    pub trajectory: Trajectory,

    /// The stopping rule that ended the run.
    pub termination: Termination,

    /// Number of updates applied. Always `trajectory.len() - 1`.
    pub iterations: usize,

    /// Gradient at the final state.
    pub final_gradient: f64,
}

impl GdResult {
    /// Final `theta`.
    pub fn theta(&self) -> f64 {
        self.trajectory.last().0
    }

    /// `H` at the final `theta`.
    pub fn energy(&self) -> f64 {
        self.trajectory.last().1
    }
}

/// Executes gradient descent with a precomputed learning-rate schedule.
pub struct GdRunner;

impl GdRunner {
    /// Runs gradient descent from `config.theta_init`.
    ///
    /// Fails only when the configuration is invalid; numeric divergence
    /// is reported through [`Termination::ConvergedNan`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_landscape::gd::{GdConfig, GdRunner, Termination};
    /// use u_landscape::DoubleWell;
    ///
    /// let result = GdRunner::run(&DoubleWell, &GdConfig::default()).unwrap();
    /// assert_eq!(result.termination, Termination::ConvergedSmallGradient);
    /// assert_eq!(result.trajectory.len(), 1);
    /// ```
    pub fn run<L: Landscape + ?Sized>(landscape: &L, config: &GdConfig) -> Result<GdResult> {
        config.validate()?;
        let schedule = config.schedule()?;

        trace_debug!(
            theta_init = config.theta_init,
            max_iterations = config.max_iterations,
            "gradient descent started"
        );

        let mut theta = config.theta_init;
        let mut trajectory =
            Trajectory::start(theta, landscape.evaluate(theta), config.max_iterations);
        let mut iterations = 0usize;
        let mut grad = f64::NAN;
        let mut termination = Termination::MaxIterationsReached;

        while iterations < config.max_iterations {
            grad = landscape.gradient(theta);

            if !grad.is_finite() {
                termination = Termination::ConvergedNan;
                break;
            }
            if grad.abs() < config.gradient_tolerance {
                termination = Termination::ConvergedSmallGradient;
                break;
            }

            theta -= schedule.rate(iterations) * grad;
            trajectory.push(theta, landscape.evaluate(theta));
            iterations += 1;
        }

        if termination == Termination::MaxIterationsReached {
            grad = landscape.gradient(theta);
        }

        trace_info!(
            theta = theta,
            iterations = iterations,
            termination = ?termination,
            "gradient descent finished"
        );

        Ok(GdResult {
            trajectory,
            termination,
            iterations,
            final_gradient: grad,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landscape::DoubleWell;

    /// `H = (theta - 1)^2`, minimum at 1.
    struct Bowl;

    impl Landscape for Bowl {
        fn evaluate(&self, theta: f64) -> f64 {
            (theta - 1.0).powi(2)
        }

        fn gradient(&self, theta: f64) -> f64 {
            2.0 * (theta - 1.0)
        }
    }

    /// Gradient is `NaN` everywhere right of 5.
    struct Cliff;

    impl Landscape for Cliff {
        fn evaluate(&self, theta: f64) -> f64 {
            -theta
        }

        fn gradient(&self, theta: f64) -> f64 {
            if theta > 5.0 {
                f64::NAN
            } else {
                -100.0
            }
        }
    }

    #[test]
    fn test_gd_origin_is_stationary() {
        let config = GdConfig::default().with_theta_init(0.0);
        let result = GdRunner::run(&DoubleWell, &config).unwrap();
        assert_eq!(result.termination, Termination::ConvergedSmallGradient);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.trajectory.len(), 1);
        assert!((result.energy() - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_gd_first_step_from_minus_one() {
        let config = GdConfig::default()
            .with_theta_init(-1.0)
            .with_max_iterations(1);
        let result = GdRunner::run(&DoubleWell, &config).unwrap();
        assert_eq!(result.termination, Termination::MaxIterationsReached);
        assert_eq!(result.trajectory.len(), 2);
        assert!((result.trajectory.first().1 - (-9.0)).abs() < 1e-12);
        // theta_1 = -1 - (1/50) * 12
        assert!((result.theta() - (-1.24)).abs() < 1e-9);
    }

    #[test]
    fn test_gd_final_gradient_at_final_theta() {
        let config = GdConfig::default()
            .with_theta_init(-1.0)
            .with_max_iterations(3);
        let result = GdRunner::run(&DoubleWell, &config).unwrap();
        assert_eq!(result.termination, Termination::MaxIterationsReached);
        assert_eq!(result.final_gradient, DoubleWell.gradient(result.theta()));
    }

    #[test]
    fn test_gd_nan_start_is_terminal_not_error() {
        let config = GdConfig::default().with_theta_init(f64::NAN);
        let result = GdRunner::run(&DoubleWell, &config).unwrap();
        assert_eq!(result.termination, Termination::ConvergedNan);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.trajectory.len(), 1);
        assert!(result.theta().is_nan());
    }

    #[test]
    fn test_gd_length_matches_iterations() {
        for &theta in &[-1.0, 0.5, 3.0] {
            let config = GdConfig::default().with_theta_init(theta);
            let result = GdRunner::run(&DoubleWell, &config).unwrap();
            assert_eq!(result.trajectory.len(), result.iterations + 1);
            assert!(result.iterations <= 500);
        }
    }

    #[test]
    fn test_gd_small_gradient_implies_tolerance() {
        let config = GdConfig::default()
            .with_theta_init(5.0)
            .with_max_iterations(10_000)
            .with_denominators(2.0, 2.0);
        let result = GdRunner::run(&Bowl, &config).unwrap();
        assert_eq!(result.termination, Termination::ConvergedSmallGradient);
        assert!(Bowl.gradient(result.theta()).abs() < config.gradient_tolerance);
        assert!((result.theta() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gd_nan_gradient_stops_at_last_valid_theta() {
        let config = GdConfig::default()
            .with_theta_init(0.0)
            .with_denominators(50.0, 50.0);
        let result = GdRunner::run(&Cliff, &config).unwrap();
        assert_eq!(result.termination, Termination::ConvergedNan);
        // 0 -> 2 -> 4 -> 6, and the gradient at 6 is NaN
        assert_eq!(result.iterations, 3);
        assert!((result.theta() - 6.0).abs() < 1e-12);
        assert!(result.final_gradient.is_nan());
    }

    #[test]
    fn test_gd_divergence_surfaces_as_nan() {
        // Huge steps on the quartic blow theta up until the gradient overflows.
        let config = GdConfig::default()
            .with_theta_init(3.0)
            .with_denominators(1e-3, 1e-3);
        let result = GdRunner::run(&DoubleWell, &config).unwrap();
        assert_eq!(result.termination, Termination::ConvergedNan);
        assert_eq!(result.trajectory.len(), result.iterations + 1);
    }

    #[test]
    fn test_gd_zero_iterations() {
        let config = GdConfig::default()
            .with_theta_init(-1.0)
            .with_max_iterations(0);
        let result = GdRunner::run(&DoubleWell, &config).unwrap();
        assert_eq!(result.termination, Termination::MaxIterationsReached);
        assert_eq!(result.trajectory.len(), 1);
        assert!((result.final_gradient - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_gd_rejects_invalid_config() {
        let config = GdConfig::default().with_gradient_tolerance(0.0);
        assert!(GdRunner::run(&DoubleWell, &config).is_err());
    }

    #[test]
    fn test_gd_deterministic() {
        let config = GdConfig::default().with_theta_init(0.5);
        let a = GdRunner::run(&DoubleWell, &config).unwrap();
        let b = GdRunner::run(&DoubleWell, &config).unwrap();
        assert_eq!(a, b);
    }
}
