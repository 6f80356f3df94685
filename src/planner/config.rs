use crate::error::{PlannerError, Result};
use crate::planner::constants::{DEFAULT_MAX_SERVINGS, DEFAULT_ZERO_EPSILON};

/// Tunable knobs of the optimizer, fixed for the lifetime of a planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Upper bound on additional servings per food.
    pub max_servings: f64,

    /// Threshold under which a solver value counts as zero servings.
    /// Zero means exact comparison.
    pub zero_epsilon: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_servings: DEFAULT_MAX_SERVINGS,
            zero_epsilon: DEFAULT_ZERO_EPSILON,
        }
    }
}

impl PlannerConfig {
    pub fn new(max_servings: f64, zero_epsilon: f64) -> Result<Self> {
        let config = Self {
            max_servings,
            zero_epsilon,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_servings.is_finite() || self.max_servings <= 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "max servings must be a positive number, got {}",
                self.max_servings
            )));
        }

        if !self.zero_epsilon.is_finite() || self.zero_epsilon < 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "zero epsilon must be a non-negative number, got {}",
                self.zero_epsilon
            )));
        }

        Ok(())
    }

    /// Whether a solver value should be reported as a recommendation.
    #[inline]
    pub fn is_recommended(&self, servings: f64) -> bool {
        servings.abs() > self.zero_epsilon
    }
}
