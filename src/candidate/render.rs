use crate::candidate::core::Candidate;
use crate::expression::Expression;

impl Candidate {
    /// Build the expression tree of the current state
    ///
    /// Mirrors [`Candidate::value`]: operands get their transforms first,
    /// then reductions are applied from the last step to the first, each
    /// one replacing the pair it consumed.
    pub fn to_expression(&self) -> Expression {
        let mut live: Vec<Expression> = (0..self.operands())
            .map(|index| {
                let transform = self.transform(index);
                Expression::transformed(
                    Expression::Operand(Self::operand_label(index)),
                    transform.square_roots,
                    transform.factorials,
                )
            })
            .collect();

        for step in (0..self.reductions()).rev() {
            let position = self.pair_position(step);
            let right = live.remove(position + 1);
            let left = live.remove(position);
            let transform = self.transform(self.operands() + step);
            let node = Expression::transformed(
                Expression::binary(self.operator(step), left, right),
                transform.square_roots,
                transform.factorials,
            );
            live.insert(position, node);
        }

        // N - 1 reductions leave exactly one live value
        live.swap_remove(0)
    }

    /// Printed form of the current state, e.g. `(((1+2))!!+(((3)!^4)-5))`
    pub fn render(&self) -> String {
        self.to_expression().to_string()
    }
}
