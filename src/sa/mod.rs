//! Simulated Annealing (SA).
//!
//! The Metropolis–Hastings acceptance loop with an inverse temperature
//! that rises linearly every step. Early, hot steps accept uphill moves
//! freely and explore; late, cold steps behave almost greedily.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
