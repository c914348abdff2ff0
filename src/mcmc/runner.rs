//! Metropolis–Hastings execution loop.

use super::chain::run_chain;
use super::config::MhConfig;
use super::proposal::{Proposal, ProposalSampler};
use crate::error::Result;
use crate::landscape::Landscape;
use crate::rng::{resolve_seed, RunStreams};
use crate::trajectory::Trajectory;
use rand::Rng;

/// Result of a Metropolis–Hastings run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MhResult {
    /// The chain state after every step, starting with `theta_init`.
    /// Rejected proposals repeat the previous state.
    pub trajectory: Trajectory,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of downhill moves.
    pub improving_moves: usize,

    /// Lowest-energy state visited.
    pub best_theta: f64,

    /// `H(best_theta)`.
    pub best_energy: f64,

    /// The seed the run used, when it built its own streams.
    pub seed: Option<u64>,
}

impl MhResult {
    /// Fraction of proposals that were accepted. `0.0` for an empty chain.
    pub fn acceptance_rate(&self) -> f64 {
        match self.trajectory.steps() {
            0 => 0.0,
            n => self.accepted_moves as f64 / n as f64,
        }
    }
}

/// Executes the Metropolis–Hastings sampler.
pub struct MhRunner;

impl MhRunner {
    /// Runs MH with a Gaussian proposal, seeding both random streams
    /// from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_landscape::mcmc::{MhConfig, MhRunner};
    /// use u_landscape::DoubleWell;
    ///
    /// let config = MhConfig::default().with_theta_init(0.5).with_seed(42);
    /// let a = MhRunner::run(&DoubleWell, &config).unwrap();
    /// let b = MhRunner::run(&DoubleWell, &config).unwrap();
    /// assert_eq!(a.trajectory.len(), 201);
    /// assert_eq!(a.trajectory, b.trajectory);
    /// ```
    pub fn run<L: Landscape + ?Sized>(landscape: &L, config: &MhConfig) -> Result<MhResult> {
        config.validate()?;

        let seed = resolve_seed(config.seed);
        let RunStreams {
            proposal,
            mut acceptance,
        } = RunStreams::from_seed(seed);
        let mut proposal = ProposalSampler::new(config.sigma, proposal)?;

        let mut result = Self::run_with(landscape, config, &mut proposal, &mut acceptance)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs MH with an injected proposal and acceptance stream.
    ///
    /// `config.sigma` is still validated but otherwise unused; the
    /// proposal decides how candidates are drawn.
    pub fn run_with<L, P, R>(
        landscape: &L,
        config: &MhConfig,
        proposal: &mut P,
        rng: &mut R,
    ) -> Result<MhResult>
    where
        L: Landscape + ?Sized,
        P: Proposal + ?Sized,
        R: Rng,
    {
        config.validate()?;

        trace_debug!(
            theta_init = config.theta_init,
            beta = config.beta,
            num_steps = config.num_steps,
            "metropolis-hastings started"
        );

        let beta = config.beta;
        let chain = run_chain(
            landscape,
            proposal,
            rng,
            config.theta_init,
            config.num_steps,
            |_| beta,
        );

        trace_info!(
            accepted = chain.accepted_moves,
            best_energy = chain.best_energy,
            "metropolis-hastings finished"
        );

        Ok(MhResult {
            trajectory: chain.trajectory,
            accepted_moves: chain.accepted_moves,
            improving_moves: chain.improving_moves,
            best_theta: chain.best_theta,
            best_energy: chain.best_energy,
            seed: None,
        })
    }
}
