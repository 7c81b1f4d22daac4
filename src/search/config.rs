use log::warn;

use crate::candidate::Verbosity;
use crate::search::errors::SearchError;

pub const DEFAULT_OPERANDS: usize = 5;
pub const DEFAULT_MAX_FACTORIALS: u8 = 2;
pub const DEFAULT_MAX_SQUARE_ROOTS: u8 = 2;
pub const DEFAULT_TARGET: f64 = 2011.0;
pub const DEFAULT_EPSILON: f64 = 0.1;
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000_000;

/// Configuration for a search run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Operands are the integers `1..=operands`
    pub operands: usize,
    /// Most factorials applied to a single operand or result
    pub max_factorials: u8,
    /// Most square roots applied to a single operand or result
    pub max_square_roots: u8,
    pub target: f64,
    /// Tolerance for matching the target and for treating values as integers
    pub epsilon: f64,
    /// Keep going after the first solution
    pub try_all: bool,
    /// Outcomes whose candidates are printed
    pub verbosity: Verbosity,
    /// Candidates between progress lines when `try_all` is set
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            operands: DEFAULT_OPERANDS,
            max_factorials: DEFAULT_MAX_FACTORIALS,
            max_square_roots: DEFAULT_MAX_SQUARE_ROOTS,
            target: DEFAULT_TARGET,
            epsilon: DEFAULT_EPSILON,
            try_all: true,
            verbosity: Verbosity::CORRECT,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SearchConfig {
    /// Check the settings that the candidate layout does not cover
    ///
    /// # Errors
    ///
    /// Returns an error for a non-finite target, a tolerance that is not
    /// positive and finite, or a zero progress interval.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.target.is_finite() {
            warn!("Rejecting non-finite target {}", self.target);
            return Err(SearchError::InvalidTarget(self.target));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            warn!("Rejecting tolerance {}", self.epsilon);
            return Err(SearchError::InvalidTolerance(self.epsilon));
        }
        if self.progress_interval == 0 {
            warn!("Rejecting zero progress interval");
            return Err(SearchError::InvalidProgressInterval);
        }
        Ok(())
    }
}
