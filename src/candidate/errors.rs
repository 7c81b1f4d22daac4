use thiserror::Error;

use crate::counter::CounterError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    #[error("Operand count {count} outside the supported range {min}..={max}")]
    InvalidOperandCount { count: usize, min: usize, max: usize },
    #[error("Counter error: {0}")]
    Counter(#[from] CounterError),
}
