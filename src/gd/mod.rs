//! Gradient Descent (GD) with a scheduled learning rate.
//!
//! Local search that steps against the analytic gradient. The step size
//! at iteration `i` is `1 / d_i`, with denominators spaced evenly from
//! `min_denom` to `max_denom` across `max_iterations` steps, so early
//! steps are long and late steps short.
//!
//! The run stops on the first of: a gradient below tolerance, a
//! non-finite gradient, or the iteration budget.

mod config;
mod runner;
mod schedule;

pub use config::GdConfig;
pub use runner::{GdResult, GdRunner, Termination};
pub use schedule::LearningRateSchedule;
