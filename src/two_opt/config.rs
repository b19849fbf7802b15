//! 2-opt configuration.

/// Configuration for the 2-opt local search.
///
/// # Examples
///
/// ```
/// use itinera::two_opt::TwoOptConfig;
///
/// let config = TwoOptConfig::default().with_max_sweeps(200);
/// assert_eq!(config.max_sweeps, 200);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoOptConfig {
    /// Maximum number of full improvement sweeps.
    ///
    /// Each sweep scans all reversal candidates once, at O(n³) cost, so
    /// this is the caller's time bound. The search usually converges well
    /// before the budget on the stop counts this crate targets (tens).
    pub max_sweeps: usize,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self { max_sweeps: 100 }
    }
}

impl TwoOptConfig {
    /// Sets the sweep budget.
    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sweeps == 0 {
            return Err("max_sweeps must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(TwoOptConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_sweeps_rejected() {
        assert!(TwoOptConfig::default().with_max_sweeps(0).validate().is_err());
    }
}
