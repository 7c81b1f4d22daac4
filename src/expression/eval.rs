use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::utils::{MAX_FACTORIAL_ARG, factorial_of, is_integer};

impl Expression {
    /// Evaluate the tree, treating values within `epsilon` of an integer as
    /// integers for factorials
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - A binary operation yields NaN or infinity (division by zero, invalid power)
    /// - A square root is taken of a negative number
    /// - A factorial is taken of a non-integer, a negative number or a value above 20
    pub fn evaluate(&self, epsilon: f64) -> Result<f64, ExpressionError> {
        match self {
            Expression::Operand(label) => Ok(f64::from(*label)),
            Expression::Binary { op, left, right } => {
                let value = op.apply(left.evaluate(epsilon)?, right.evaluate(epsilon)?);
                if value.is_finite() {
                    Ok(value)
                } else {
                    debug!("Non-finite result from '{}'", self);
                    Err(ExpressionError::NonFiniteResult)
                }
            }
            Expression::Transformed {
                inner,
                square_roots,
                factorials,
            } => {
                let mut value = inner.evaluate(epsilon)?;
                for _ in 0..*square_roots {
                    if value < 0.0 {
                        return Err(ExpressionError::NegativeSquareRoot(value));
                    }
                    value = value.sqrt();
                }
                for _ in 0..*factorials {
                    if !is_integer(value, epsilon) {
                        return Err(ExpressionError::NonIntegerFactorial(value));
                    }
                    if value < 0.0 || value > MAX_FACTORIAL_ARG as f64 {
                        return Err(ExpressionError::FactorialOutOfRange(value));
                    }
                    value = factorial_of(value)
                        .ok_or(ExpressionError::FactorialOutOfRange(value))?;
                }
                Ok(value)
            }
        }
    }
}
