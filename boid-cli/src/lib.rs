//! Command-line front end for the boid predation simulation: settings,
//! statistics, reports and run drivers.

pub mod config;
pub mod report;
pub mod runner;
pub mod stats;

pub use config::{load_settings, validate, ConfigError, Overrides, SimulationPlan};
pub use runner::{run_batch, run_single, RunOutcome};
