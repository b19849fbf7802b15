//! 2-opt local search.
//!
//! Iteratively improves an existing visiting order by reversing
//! sub-segments whenever the reversal strictly reduces total distance,
//! which untangles pairs of crossing edges.
//!
//! # References
//!
//! - Croes (1958), "A method for solving traveling-salesman problems"
//! - Lin (1965), "Computer solutions of the traveling salesman problem"

mod config;
mod runner;

pub use config::TwoOptConfig;
pub use runner::{TwoOptResult, TwoOptRunner};
