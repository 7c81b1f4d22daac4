use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ParseError;

/// Parse an infix expression over operand labels
///
/// Precedence from loosest to tightest: `+ -`, `* /`, `^` (right
/// associative), prefix `√`, postfix `!`. Whitespace is ignored. Repeated
/// roots and factorials on one node fold into a single
/// [`Expression::Transformed`], so printed candidates parse back to the
/// tree they were printed from.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first offending character.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser {
        chars: input.char_indices().peekable(),
    };
    let expression = parser.sum()?;
    match parser.peek() {
        None => Ok(expression),
        Some((position, _)) => Err(ParseError::TrailingInput { position }),
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn peek(&mut self) -> Option<(usize, char)> {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
        self.chars.peek().copied()
    }

    fn next_if_symbol(&mut self, symbols: &[char]) -> Option<char> {
        match self.peek() {
            Some((_, c)) if symbols.contains(&c) => {
                self.chars.next();
                Some(c)
            }
            _ => None,
        }
    }

    fn sum(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.product()?;
        while let Some(symbol) = self.next_if_symbol(&['+', '-']) {
            let op = if symbol == '+' {
                Operator::Add
            } else {
                Operator::Sub
            };
            left = Expression::binary(op, left, self.product()?);
        }
        Ok(left)
    }

    fn product(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.power()?;
        while let Some(symbol) = self.next_if_symbol(&['*', '/']) {
            let op = if symbol == '*' {
                Operator::Mul
            } else {
                Operator::Div
            };
            left = Expression::binary(op, left, self.power()?);
        }
        Ok(left)
    }

    fn power(&mut self) -> Result<Expression, ParseError> {
        let base = self.root()?;
        if self.next_if_symbol(&['^']).is_some() {
            let exponent = self.power()?;
            return Ok(Expression::binary(Operator::Pow, base, exponent));
        }
        Ok(base)
    }

    fn root(&mut self) -> Result<Expression, ParseError> {
        if self.next_if_symbol(&['√']).is_none() {
            return self.factorial();
        }
        Ok(match self.root()? {
            Expression::Transformed {
                inner,
                square_roots,
                factorials: 0,
            } => Expression::Transformed {
                inner,
                square_roots: square_roots.saturating_add(1),
                factorials: 0,
            },
            other => Expression::transformed(other, 1, 0),
        })
    }

    fn factorial(&mut self) -> Result<Expression, ParseError> {
        let primary = self.primary()?;
        let mut count: u8 = 0;
        while self.next_if_symbol(&['!']).is_some() {
            count = count.saturating_add(1);
        }
        if count == 0 {
            return Ok(primary);
        }
        Ok(match primary {
            Expression::Transformed {
                inner,
                square_roots,
                factorials: 0,
            } => Expression::Transformed {
                inner,
                square_roots,
                factorials: count,
            },
            other => Expression::transformed(other, 0, count),
        })
    }

    fn primary(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some((_, '(')) => {
                self.chars.next();
                let inner = self.sum()?;
                match self.peek() {
                    Some((_, ')')) => {
                        self.chars.next();
                        Ok(inner)
                    }
                    Some((position, found)) => {
                        Err(ParseError::UnexpectedCharacter { found, position })
                    }
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            Some((_, c)) if c.is_ascii_digit() => {
                let mut label = String::new();
                while let Some(&(_, c)) = self.chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    label.push(c);
                    self.chars.next();
                }
                label
                    .parse::<u8>()
                    .map(Expression::Operand)
                    .map_err(|_| ParseError::InvalidOperand(label))
            }
            Some((position, found)) => Err(ParseError::UnexpectedCharacter { found, position }),
        }
    }
}
