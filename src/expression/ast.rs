/// Binary operators, in counter-digit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// Operator selected by a counter digit
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Raw IEEE result; callers decide what a non-finite value means
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Pow => left.powf(right),
        }
    }
}

/// Expression built from operand labels, binary operators, square roots
/// and factorials
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Operand label; operand `n` has the value `n`
    Operand(u8),
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `square_roots` roots are taken first, then `factorials` factorials
    Transformed {
        inner: Box<Expression>,
        square_roots: u8,
        factorials: u8,
    },
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Wrap `inner` in the given transforms; no-op when both counts are zero
    pub fn transformed(inner: Expression, square_roots: u8, factorials: u8) -> Self {
        if square_roots == 0 && factorials == 0 {
            inner
        } else {
            Expression::Transformed {
                inner: Box::new(inner),
                square_roots,
                factorials,
            }
        }
    }
}
