use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    /// Fully parenthesised infix form, e.g. `(((1+2))!!+(((3)!^4)-5))`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Operand(label) => write!(f, "{}", label),
            Expression::Binary { op, left, right } => write!(f, "({}{}{})", left, op, right),
            Expression::Transformed {
                inner,
                square_roots,
                factorials,
            } => {
                let mut text = inner.to_string();
                if *square_roots > 0 {
                    text = format!("{}({})", "√".repeat(usize::from(*square_roots)), text);
                }
                if *factorials > 0 {
                    text = format!("({}){}", text, "!".repeat(usize::from(*factorials)));
                }
                f.write_str(&text)
            }
        }
    }
}
