//! Simulated Annealing (SA) refinement.
//!
//! Stochastic global refinement of a visiting order. Perturbs the route
//! by random position swaps, accepting worsening moves with a probability
//! that decays with temperature, which lets the search escape the local
//! optima that 2-opt gets stuck in. The best order ever observed is
//! tracked and returned.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
