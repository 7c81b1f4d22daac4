//! One fully specified expression: the state of four digit counters
//!
//! The operator and pair-position counters describe the N-1 binary
//! reductions; the factorial and square-root counters describe the
//! transforms applied to each of the N operands and N-1 reduction results.
//! Reductions are consumed from the last slot to the first, both when
//! evaluating and when rendering.

mod core;
mod errors;
mod outcome;
mod render;

pub use self::core::{Candidate, MIN_OPERANDS, Transform};
pub use errors::CandidateError;
pub use outcome::{EvaluationOutcome, Verbosity};
