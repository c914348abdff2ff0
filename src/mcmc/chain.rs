//! Metropolis acceptance loop shared by MH and SA.

use super::proposal::Proposal;
use crate::landscape::Landscape;
use crate::trajectory::Trajectory;
use rand::Rng;

/// Probability of accepting a move that changes the energy by `delta`
/// at inverse temperature `beta`.
///
/// Downhill moves are always accepted. Uphill moves are accepted with
/// `exp(-beta * delta)`, which underflows to exactly `0.0` for very large
/// `beta * delta`. A `NaN` delta yields `NaN`, which never passes the
/// uniform comparison.
///
/// # Examples
///
/// ```
/// use u_landscape::mcmc::acceptance_probability;
///
/// assert_eq!(acceptance_probability(-3.0, 1.5), 1.0);
/// assert!((acceptance_probability(1.0, 1.0) - (-1.0f64).exp()).abs() < 1e-15);
/// assert_eq!(acceptance_probability(1e6, 1.0), 0.0);
/// ```
pub fn acceptance_probability(delta: f64, beta: f64) -> f64 {
    if delta < 0.0 {
        1.0
    } else {
        (-beta * delta).exp()
    }
}

/// Outcome of a full chain.
#[derive(Debug, Clone)]
pub(crate) struct Chain {
    pub trajectory: Trajectory,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    pub best_theta: f64,
    pub best_energy: f64,
}

/// Runs `num_steps` Metropolis steps from `theta_init`, using
/// `beta_at(i)` as the inverse temperature of step `i`.
///
/// The uniform draw is taken only for non-improving moves, so the
/// acceptance stream advances once per uphill proposal.
pub(crate) fn run_chain<L, P, R, B>(
    landscape: &L,
    proposal: &mut P,
    rng: &mut R,
    theta_init: f64,
    num_steps: usize,
    beta_at: B,
) -> Chain
where
    L: Landscape + ?Sized,
    P: Proposal + ?Sized,
    R: Rng,
    B: Fn(usize) -> f64,
{
    let mut theta = theta_init;
    let mut energy = landscape.evaluate(theta);
    let mut trajectory = Trajectory::start(theta, energy, num_steps);

    let mut best_theta = theta;
    let mut best_energy = energy;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    for step in 0..num_steps {
        let candidate = proposal.propose(theta);
        let candidate_energy = landscape.evaluate(candidate);
        let delta = candidate_energy - energy;

        let accept = if delta < 0.0 {
            improving_moves += 1;
            true
        } else {
            rng.random_range(0.0..1.0) < acceptance_probability(delta, beta_at(step))
        };

        if accept {
            theta = candidate;
            energy = candidate_energy;
            accepted_moves += 1;

            if energy < best_energy {
                best_theta = theta;
                best_energy = energy;
            }
        }

        trajectory.push(theta, energy);
    }

    Chain {
        trajectory,
        accepted_moves,
        improving_moves,
        best_theta,
        best_energy,
    }
}
