//! Batch execution over several initial conditions.
//!
//! [`DriverParams`] holds run parameters as they arrive from outside the
//! crate (a CLI, a JSON file) and turns them into validated runner
//! configurations. Every configuration of a batch is validated before
//! the first run starts.
//!
//! Runs share nothing mutable. With the `parallel` feature they are
//! spread across the `rayon` thread pool; each run still owns its seed
//! (`seed + index`), so results do not depend on scheduling.

use std::fmt;

use crate::error::{Error, Result};
use crate::gd::{GdConfig, GdResult, GdRunner};
use crate::landscape::{grid_minimum, Landscape};
use crate::mcmc::{MhConfig, MhResult, MhRunner};
use crate::sa::{SaConfig, SaResult, SaRunner};
use crate::trajectory::Trajectory;

/// Starting points used when none are given.
pub const DEFAULT_INITIAL_CONDITIONS: [f64; 3] = [-1.0, 0.5, 3.0];

/// Raw run parameters for all three algorithms.
///
/// Step counts are signed so that out-of-range input is reported as
/// [`Error::InvalidConfiguration`] instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverParams {
    pub initial_conditions: Vec<f64>,
    pub max_iterations: i64,
    pub gradient_tolerance: f64,
    pub beta: f64,
    pub beta_init: f64,
    pub delta_beta: f64,
    pub sigma: f64,
    pub num_steps: i64,
    /// Base seed. Run `i` of a batch uses `seed + i`.
    pub seed: Option<u64>,
}

impl Default for DriverParams {
    fn default() -> Self {
        Self {
            initial_conditions: DEFAULT_INITIAL_CONDITIONS.to_vec(),
            max_iterations: 500,
            gradient_tolerance: 1e-6,
            beta: 1.5,
            beta_init: 0.5,
            delta_beta: 0.02,
            sigma: 0.5,
            num_steps: 200,
            seed: None,
        }
    }
}

impl DriverParams {
    pub fn with_initial_conditions(mut self, thetas: impl Into<Vec<f64>>) -> Self {
        self.initial_conditions = thetas.into();
        self
    }

    pub fn with_max_iterations(mut self, n: i64) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_num_steps(mut self, n: i64) -> Self {
        self.num_steps = n;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed of the `index`-th run of a batch.
    pub fn run_seed(&self, index: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(index as u64))
    }

    /// Gradient descent configuration starting at `theta`.
    pub fn gd_config(&self, theta: f64) -> Result<GdConfig> {
        let config = GdConfig::default()
            .with_theta_init(theta)
            .with_max_iterations(checked_count("max_iterations", self.max_iterations)?)
            .with_gradient_tolerance(self.gradient_tolerance);
        config.validate()?;
        Ok(config)
    }

    /// Metropolis–Hastings configuration for the `index`-th run.
    pub fn mh_config(&self, index: usize, theta: f64) -> Result<MhConfig> {
        let config = MhConfig {
            theta_init: theta,
            beta: self.beta,
            sigma: self.sigma,
            num_steps: checked_count("num_steps", self.num_steps)?,
            seed: self.run_seed(index),
        };
        config.validate()?;
        Ok(config)
    }

    /// Simulated annealing configuration for the `index`-th run.
    pub fn sa_config(&self, index: usize, theta: f64) -> Result<SaConfig> {
        let config = SaConfig {
            theta_init: theta,
            beta_init: self.beta_init,
            delta_beta: self.delta_beta,
            sigma: self.sigma,
            num_steps: checked_count("num_steps", self.num_steps)?,
            seed: self.run_seed(index),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Converts an externally supplied count, rejecting negative values.
pub fn checked_count(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| Error::invalid(field, format!("must be non-negative, got {value}")))
}

/// Runs gradient descent from every initial condition.
pub fn run_gd_batch<L: Landscape + ?Sized>(
    landscape: &L,
    params: &DriverParams,
) -> Result<Vec<GdResult>> {
    let configs = params
        .initial_conditions
        .iter()
        .map(|&theta| params.gd_config(theta))
        .collect::<Result<Vec<_>>>()?;
    map_runs(configs, |config| GdRunner::run(landscape, &config))
}

/// Runs Metropolis–Hastings from every initial condition.
pub fn run_mh_batch<L: Landscape + ?Sized>(
    landscape: &L,
    params: &DriverParams,
) -> Result<Vec<MhResult>> {
    let configs = params
        .initial_conditions
        .iter()
        .enumerate()
        .map(|(i, &theta)| params.mh_config(i, theta))
        .collect::<Result<Vec<_>>>()?;
    map_runs(configs, |config| MhRunner::run(landscape, &config))
}

/// Runs simulated annealing from every initial condition.
pub fn run_sa_batch<L: Landscape + ?Sized>(
    landscape: &L,
    params: &DriverParams,
) -> Result<Vec<SaResult>> {
    let configs = params
        .initial_conditions
        .iter()
        .enumerate()
        .map(|(i, &theta)| params.sa_config(i, theta))
        .collect::<Result<Vec<_>>>()?;
    map_runs(configs, |config| SaRunner::run(landscape, &config))
}

#[cfg(feature = "parallel")]
fn map_runs<C, T, F>(configs: Vec<C>, run: F) -> Result<Vec<T>>
where
    C: Send,
    T: Send,
    F: Fn(C) -> Result<T> + Sync + Send,
{
    use rayon::prelude::*;
    configs.into_par_iter().map(run).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_runs<C, T, F>(configs: Vec<C>, run: F) -> Result<Vec<T>>
where
    F: Fn(C) -> Result<T>,
{
    configs.into_iter().map(run).collect()
}

/// Lowest grid minimum of `landscape` over `[-3, 3]`, the reference point
/// for [`RunSummary::distance_to_minimum`].
pub fn reference_minimum<L: Landscape + ?Sized>(landscape: &L) -> Option<(f64, f64)> {
    grid_minimum(landscape, -3.0, 3.0, 10_000)
}

/// One row of a batch report.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub theta_init: f64,
    pub final_theta: f64,
    pub final_energy: f64,
    pub steps: usize,
    /// `|final_theta - theta_ref|` for the reference minimum, when known.
    pub distance_to_minimum: Option<f64>,
}

impl RunSummary {
    pub fn new(trajectory: &Trajectory, reference: Option<(f64, f64)>) -> Self {
        let (theta_init, _) = trajectory.first();
        let (final_theta, final_energy) = trajectory.last();
        Self {
            theta_init,
            final_theta,
            final_energy,
            steps: trajectory.steps(),
            distance_to_minimum: reference.map(|(theta_ref, _)| (final_theta - theta_ref).abs()),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10.2} | {:<12.6} | {:<12.6} | {:<6}",
            self.theta_init, self.final_theta, self.final_energy, self.steps
        )?;
        match self.distance_to_minimum {
            Some(d) => write!(f, " | {d:<12.6}"),
            None => write!(f, " | {:<12}", "-"),
        }
    }
}

/// Summarises a batch of trajectories against the landscape's
/// reference minimum.
pub fn summarize<'a, L, I>(landscape: &L, trajectories: I) -> Vec<RunSummary>
where
    L: Landscape + ?Sized,
    I: IntoIterator<Item = &'a Trajectory>,
{
    let reference = reference_minimum(landscape);
    trajectories
        .into_iter()
        .map(|t| RunSummary::new(t, reference))
        .collect()
}
