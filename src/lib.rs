//! Yearsum - exhaustive search for arithmetic expressions over `1..=N`
//!
//! Every candidate combines the operands `1, 2, ..., N` in order with `N - 1`
//! binary operators (`+ - * / ^`), optionally taking square roots and
//! factorials of operands and intermediate results. The search enumerates
//! all candidates and reports those that evaluate to a target, such as
//! `(((1+2))!!+(((3)!^4)-5)) = 2011`.

pub mod candidate;
pub mod counter;
pub mod expression;
pub mod search;
pub mod utils;

// Re-export the main public API
pub use candidate::{Candidate, CandidateError, EvaluationOutcome, Verbosity};
pub use expression::{Expression, ExpressionError, Operator, ParseError};
pub use search::{CandidateSearch, SearchConfig, SearchError, SearchReport};

/// Find the first expression over `1..=operands` that evaluates to `target`
///
/// Uses the default factorial, square-root and tolerance settings and stops
/// at the first solution. Nothing is printed.
///
/// # Returns
///
/// * `Ok(Some(Expression))` - If a matching expression is found
/// * `Ok(None)` - If no candidate matches
/// * `Err(SearchError)` - If the operand count or target is invalid
///
/// # Examples
///
/// ```
/// use yearsum::find_expression;
///
/// match find_expression(3, 9.0) {
///     Ok(Some(expr)) => assert_eq!(expr.to_string(), "((1+2)*3)"),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression(operands: usize, target: f64) -> Result<Option<Expression>, SearchError> {
    let search = CandidateSearch::new(SearchConfig {
        operands,
        target,
        try_all: false,
        verbosity: Verbosity::NONE,
        ..SearchConfig::default()
    })?;
    let report = search.run(&mut std::io::sink())?;
    Ok(report.first_solution)
}
