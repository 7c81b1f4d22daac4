//! Expression trees for printed candidates
//!
//! A candidate is rendered by building an [`Expression`], whose `Display`
//! form is the line the search prints. The tree can be evaluated on its own
//! and parsed back from its printed form.

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::{Expression, Operator};
pub use errors::{ExpressionError, ParseError};
pub use parse::parse;
