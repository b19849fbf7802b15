//! Strategy selection and improvement reporting.

use super::config::{OptimizerConfig, Strategy};
use crate::nearest::nearest_neighbor;
use crate::route::{total_distance, Route, Stop};
use crate::sa::{SaConfig, SaRunner};
use crate::two_opt::{TwoOptConfig, TwoOptRunner};
use log::debug;

/// Outcome of one optimization run.
///
/// Ephemeral value: callers display or persist it themselves. A negative
/// `improvement_pct` is reported as-is — annealing a tiny instance can
/// legitimately fail to beat the input order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// The optimized visiting order; always a permutation of the input.
    pub route: Route,

    /// Total distance of the input order in kilometers.
    pub original_distance: f64,

    /// Total distance of the optimized order in kilometers.
    pub optimized_distance: f64,

    /// `(original - optimized) / original * 100`; defined as 0 when the
    /// original distance is 0.
    pub improvement_pct: f64,

    /// Name of the strategy that ran, or `"none"` for degenerate inputs.
    pub strategy: String,
}

/// Chains the heuristic stages per an [`OptimizerConfig`].
pub struct Optimizer;

impl Optimizer {
    /// Computes an optimized visiting order for `stops`.
    ///
    /// Inputs of 0 or 1 stops short-circuit to a zero-cost result tagged
    /// `"none"` without running any heuristic. A configured start id that
    /// matches no stop falls back to starting at index 0.
    pub fn run(stops: &[Stop], config: &OptimizerConfig) -> OptimizationResult {
        if stops.len() <= 1 {
            return OptimizationResult {
                route: stops.to_vec(),
                original_distance: 0.0,
                optimized_distance: 0.0,
                improvement_pct: 0.0,
                strategy: "none".to_string(),
            };
        }

        let original_distance = total_distance(stops);
        let start_index = resolve_start(stops, config.start_id.as_deref());

        debug!(
            "optimizing {} stops with {} from index {start_index}",
            stops.len(),
            config.strategy.name()
        );

        let route = match config.strategy {
            Strategy::Nearest => nearest_neighbor(stops, start_index),

            Strategy::TwoOpt { max_sweeps } => {
                let seed = nearest_neighbor(stops, start_index);
                let two_opt = TwoOptConfig::default().with_max_sweeps(max_sweeps);
                TwoOptRunner::run(&seed, &two_opt).route
            }

            Strategy::Annealing {
                initial_temperature,
                cooling_rate,
            } => {
                let sa = sa_config(initial_temperature, cooling_rate, config.seed);
                SaRunner::run(stops, &sa).best
            }

            Strategy::Hybrid {
                max_sweeps,
                initial_temperature,
                cooling_rate,
            } => {
                let seed = nearest_neighbor(stops, start_index);
                let two_opt = TwoOptConfig::default().with_max_sweeps(max_sweeps);
                let improved = TwoOptRunner::run(&seed, &two_opt).route;
                let sa = sa_config(initial_temperature, cooling_rate, config.seed);
                SaRunner::run(&improved, &sa).best
            }
        };

        let optimized_distance = total_distance(&route);
        let improvement_pct = if original_distance > 0.0 {
            (original_distance - optimized_distance) / original_distance * 100.0
        } else {
            0.0
        };

        debug!(
            "{}: {original_distance:.3} km -> {optimized_distance:.3} km ({improvement_pct:+.1}%)",
            config.strategy.name()
        );

        OptimizationResult {
            route,
            original_distance,
            optimized_distance,
            improvement_pct,
            strategy: config.strategy.name().to_string(),
        }
    }
}

/// Finds the index of the requested start stop, falling back to 0 when
/// the id is absent or unknown.
fn resolve_start(stops: &[Stop], start_id: Option<&str>) -> usize {
    start_id
        .and_then(|id| stops.iter().position(|s| s.id == id))
        .unwrap_or(0)
}

fn sa_config(initial_temperature: f64, cooling_rate: f64, seed: Option<u64>) -> SaConfig {
    let config = SaConfig::default()
        .with_initial_temperature(initial_temperature)
        .with_cooling_rate(cooling_rate);
    match seed {
        Some(s) => config.with_seed(s),
        None => config,
    }
}
