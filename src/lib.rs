//! Optimization and sampling on a one-dimensional energy landscape.
//!
//! Provides three trajectory-producing algorithms over a scalar
//! objective `H(theta)`:
//!
//! - **Gradient Descent (GD)**: deterministic local search with a
//!   precomputed, decreasing learning-rate schedule.
//! - **Metropolis–Hastings (MH)**: stochastic sampling at a fixed inverse
//!   temperature with a Gaussian proposal.
//! - **Simulated Annealing (SA)**: the MH acceptance loop with an inverse
//!   temperature that rises linearly every step.
//!
//! Every run returns its full trajectory of `(theta, H(theta))` pairs
//! together with a report record. Plotting and export are left to the
//! caller.
//!
//! # Reproducibility
//!
//! Stochastic runs own their random streams. Two runs with the same seed
//! and configuration produce bit-identical trajectories, whether they are
//! executed sequentially or in parallel through [`driver`].
//!
//! # Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `serde` | `Serialize`/`Deserialize` for configs, results and trajectories | off |
//! | `parallel` | Run driver batches across initial conditions with `rayon` | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at run start and completion | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod driver;
mod error;
pub mod gd;
pub mod landscape;
pub mod mcmc;
pub mod rng;
pub mod sa;
mod trajectory;

pub use error::{Error, Result};
pub use landscape::{DoubleWell, Landscape};
pub use trajectory::Trajectory;
