//! SA execution loop.

use super::config::SaConfig;
use crate::error::Result;
use crate::landscape::Landscape;
use crate::mcmc::{run_chain, Proposal, ProposalSampler};
use crate::rng::{resolve_seed, RunStreams};
use crate::trajectory::Trajectory;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The chain state after every step, starting with `theta_init`.
    pub trajectory: Trajectory,

    /// Inverse temperature reached after the last step,
    /// `beta_init + num_steps * delta_beta`.
    pub final_beta: f64,

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

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a Gaussian proposal, seeding both random streams from
    /// `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_landscape::sa::{SaConfig, SaRunner};
    /// use u_landscape::DoubleWell;
    ///
    /// let config = SaConfig::default().with_theta_init(-1.0).with_seed(3);
    /// let result = SaRunner::run(&DoubleWell, &config).unwrap();
    /// assert_eq!(result.trajectory.len(), 201);
    /// assert_eq!(result.final_beta, 0.5 + 200.0 * 0.02);
    /// ```
    pub fn run<L: Landscape + ?Sized>(landscape: &L, config: &SaConfig) -> Result<SaResult> {
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

    /// Runs SA with an injected proposal and acceptance stream.
    pub fn run_with<L, P, R>(
        landscape: &L,
        config: &SaConfig,
        proposal: &mut P,
        rng: &mut R,
    ) -> Result<SaResult>
    where
        L: Landscape + ?Sized,
        P: Proposal + ?Sized,
        R: Rng,
    {
        config.validate()?;

        trace_debug!(
            theta_init = config.theta_init,
            beta_init = config.beta_init,
            delta_beta = config.delta_beta,
            num_steps = config.num_steps,
            "simulated annealing started"
        );

        let chain = run_chain(
            landscape,
            proposal,
            rng,
            config.theta_init,
            config.num_steps,
            |step| config.beta_at_step(step),
        );
        let final_beta = config.final_beta();

        trace_info!(
            final_beta = final_beta,
            accepted = chain.accepted_moves,
            best_energy = chain.best_energy,
            "simulated annealing finished"
        );

        Ok(SaResult {
            trajectory: chain.trajectory,
            final_beta,
            accepted_moves: chain.accepted_moves,
            improving_moves: chain.improving_moves,
            best_theta: chain.best_theta,
            best_energy: chain.best_energy,
            seed: None,
        })
    }
}
