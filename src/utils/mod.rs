//! Numeric helpers shared by the evaluator and the expression tree

mod factorial;
mod float;

pub use factorial::{FACTORIALS, MAX_FACTORIAL_ARG, factorial_of};
pub use float::{approx_eq, is_integer};

#[cfg(test)]
mod tests;
