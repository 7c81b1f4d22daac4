use thiserror::Error;

use crate::candidate::CandidateError;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Candidate error: {0}")]
    Candidate(#[from] CandidateError),
    #[error("Tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
    #[error("Target must be finite, got {0}")]
    InvalidTarget(f64),
    #[error("Progress interval must be at least 1")]
    InvalidProgressInterval,
    #[error("Failed to write search output: {0}")]
    Io(#[from] std::io::Error),
}
