//! Orchestrator configuration.

/// Which heuristic pipeline to run.
///
/// Variants carry their tuning parameters so a strategy choice is always
/// a complete, explicit description of the run — there is no hidden bag
/// of optional knobs. The `*` constructors supply the documented
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Nearest-neighbor construction only.
    Nearest,

    /// Nearest-neighbor construction followed by 2-opt local search.
    TwoOpt {
        /// Sweep budget for the 2-opt stage.
        max_sweeps: usize,
    },

    /// Simulated annealing directly on the input order, with no
    /// constructive seed.
    Annealing {
        /// Starting temperature.
        initial_temperature: f64,
        /// Geometric cooling factor in (0, 1).
        cooling_rate: f64,
    },

    /// Full pipeline: nearest-neighbor seed, 2-opt improvement, then a
    /// shorter annealing pass. The default.
    Hybrid {
        /// Sweep budget for the 2-opt stage.
        max_sweeps: usize,
        /// Starting temperature for the annealing stage.
        initial_temperature: f64,
        /// Geometric cooling factor in (0, 1).
        cooling_rate: f64,
    },
}

impl Strategy {
    /// Nearest-neighbor only.
    pub fn nearest() -> Self {
        Strategy::Nearest
    }

    /// 2-opt with the default 200-sweep budget.
    pub fn two_opt() -> Self {
        Strategy::TwoOpt { max_sweeps: 200 }
    }

    /// Annealing with the default schedule (T0 = 1000, cooling 0.995).
    pub fn annealing() -> Self {
        Strategy::Annealing {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
        }
    }

    /// Hybrid with the default stage parameters (150 sweeps, then
    /// T0 = 500, cooling 0.99).
    pub fn hybrid() -> Self {
        Strategy::Hybrid {
            max_sweeps: 150,
            initial_temperature: 500.0,
            cooling_rate: 0.99,
        }
    }

    /// Strategy name as reported in [`super::OptimizationResult`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Nearest => "nearest",
            Strategy::TwoOpt { .. } => "two-opt",
            Strategy::Annealing { .. } => "annealing",
            Strategy::Hybrid { .. } => "hybrid",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::hybrid()
    }
}

/// Configuration for [`super::Optimizer`].
///
/// # Examples
///
/// ```
/// use itinera::optimizer::{OptimizerConfig, Strategy};
///
/// let config = OptimizerConfig::default()
///     .with_strategy(Strategy::annealing())
///     .with_start_id("hotel")
///     .with_seed(42);
/// assert_eq!(config.strategy.name(), "annealing");
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    /// Heuristic pipeline to run.
    pub strategy: Strategy,

    /// Id of the stop the route should start from. When absent, or when
    /// no stop carries this id, the first input stop is used.
    pub start_id: Option<String>,

    /// Seed for the annealing stage. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl OptimizerConfig {
    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the starting stop id.
    pub fn with_start_id(mut self, id: impl Into<String>) -> Self {
        self.start_id = Some(id.into());
        self
    }

    /// Sets the annealing seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
