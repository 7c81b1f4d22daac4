use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Binary operation produced a non-finite result")]
    NonFiniteResult,
    #[error("Square root of negative number {0}")]
    NegativeSquareRoot(f64),
    #[error("Factorial of non-integer {0}")]
    NonIntegerFactorial(f64),
    #[error("Factorial argument {0} outside the supported range")]
    FactorialOutOfRange(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Unparsed input starting at position {position}")]
    TrailingInput { position: usize },
    #[error("Invalid operand '{0}'")]
    InvalidOperand(String),
}
