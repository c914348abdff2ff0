//! Metropolis–Hastings (MH) sampling.
//!
//! A random walk over `theta` with a Gaussian proposal. Downhill
//! proposals are always accepted; uphill proposals are accepted with
//! probability `exp(-beta * delta_h)` at a fixed inverse temperature
//! `beta`. The acceptance loop is shared with [`crate::sa`].
//!
//! # References
//!
//! - Metropolis, Rosenbluth, Rosenbluth, Teller & Teller (1953),
//!   "Equation of State Calculations by Fast Computing Machines"
//! - Hastings (1970), "Monte Carlo Sampling Methods Using Markov Chains
//!   and Their Applications"

mod chain;
mod config;
mod proposal;
mod runner;

pub(crate) use chain::run_chain;
pub use chain::acceptance_probability;
pub use config::MhConfig;
pub use proposal::{Proposal, ProposalSampler};
pub use runner::{MhResult, MhRunner};
