//! Optimization orchestrator.
//!
//! Selects and chains the constructive, local-search, and annealing
//! stages per a [`Strategy`], measures before/after total distance, and
//! reports improvement statistics.

mod config;
mod runner;

pub use config::{OptimizerConfig, Strategy};
pub use runner::{OptimizationResult, Optimizer};
