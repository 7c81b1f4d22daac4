use log::error;

use crate::candidate::errors::CandidateError;
use crate::candidate::outcome::EvaluationOutcome;
use crate::counter::{DigitCounter, MAX_OPERANDS, RadixCounter, TriangularCounter};
use crate::expression::Operator;
use crate::utils::{MAX_FACTORIAL_ARG, approx_eq, factorial_of, is_integer};

/// Fewest operands a candidate can combine
pub const MIN_OPERANDS: usize = 2;

/// Factorials on operands 1 and 2 never change their value
const FACTORIAL_PINNED_SLOTS: usize = 2;
/// A square root of operand 1 is still 1
const SQUARE_ROOT_PINNED_SLOTS: usize = 1;

/// Transforms applied to one operand or reduction result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transform {
    pub square_roots: u8,
    pub factorials: u8,
}

/// Counter state describing one expression over the operands `1..=N`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    operands: usize,
    operators: RadixCounter,
    pair_positions: TriangularCounter,
    factorials: RadixCounter,
    square_roots: RadixCounter,
}

impl Candidate {
    /// Start at the all-zero state, `((..(1+2)+..)+N)`
    ///
    /// # Errors
    ///
    /// Returns an error if `operands` is outside `MIN_OPERANDS..=MAX_OPERANDS`.
    pub fn new(
        operands: usize,
        max_factorials: u8,
        max_square_roots: u8,
    ) -> Result<Self, CandidateError> {
        if !(MIN_OPERANDS..=MAX_OPERANDS).contains(&operands) {
            return Err(CandidateError::InvalidOperandCount {
                count: operands,
                min: MIN_OPERANDS,
                max: MAX_OPERANDS,
            });
        }
        let reductions = operands - 1;
        let slots = operands + reductions;
        let max_operator = (Operator::ALL.len() - 1) as u8;

        Ok(Self {
            operands,
            operators: RadixCounter::new(reductions, max_operator, 0)?,
            pair_positions: TriangularCounter::new(reductions)?,
            factorials: RadixCounter::new(slots, max_factorials, FACTORIAL_PINNED_SLOTS)?,
            square_roots: RadixCounter::new(slots, max_square_roots, SQUARE_ROOT_PINNED_SLOTS)?,
        })
    }

    pub fn operands(&self) -> usize {
        self.operands
    }

    /// Number of binary reductions, `N - 1`
    pub fn reductions(&self) -> usize {
        self.operands - 1
    }

    pub fn operators(&self) -> &RadixCounter {
        &self.operators
    }

    pub fn pair_positions(&self) -> &TriangularCounter {
        &self.pair_positions
    }

    pub fn factorials(&self) -> &RadixCounter {
        &self.factorials
    }

    pub fn square_roots(&self) -> &RadixCounter {
        &self.square_roots
    }

    /// Jump to a specific candidate
    ///
    /// Digits are given least significant first, as [`DigitCounter::digits`]
    /// returns them. Nothing changes if any sequence is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if a sequence has the wrong length, a digit exceeds
    /// its radix or a pinned slot is non-zero.
    pub fn set_state(
        &mut self,
        operators: &[u8],
        pair_positions: &[u8],
        factorials: &[u8],
        square_roots: &[u8],
    ) -> Result<(), CandidateError> {
        let mut next = self.clone();
        next.operators.set_digits(operators)?;
        next.pair_positions.set_digits(pair_positions)?;
        next.factorials.set_digits(factorials)?;
        next.square_roots.set_digits(square_roots)?;
        *self = next;
        Ok(())
    }

    /// Move to the next candidate; `false` once every candidate was visited
    ///
    /// Counters are polled in priority order and the first one that
    /// advances wins, so the operator counter turns fastest.
    pub fn advance(&mut self) -> bool {
        let mut chain: [&mut dyn DigitCounter; 4] = [
            &mut self.operators,
            &mut self.pair_positions,
            &mut self.factorials,
            &mut self.square_roots,
        ];
        chain.iter_mut().any(|counter| counter.advance())
    }

    /// Size of the search space, saturating at `u128::MAX`
    pub fn total_candidates(&self) -> u128 {
        [
            self.operators.state_count(),
            self.pair_positions.state_count(),
            self.factorials.state_count(),
            self.square_roots.state_count(),
        ]
        .into_iter()
        .fold(1, u128::saturating_mul)
    }

    /// Transforms of slot `slot`: operands first, then reduction results
    pub fn transform(&self, slot: usize) -> Transform {
        Transform {
            square_roots: self.square_roots.digits()[slot],
            factorials: self.factorials.digits()[slot],
        }
    }

    pub(crate) fn pair_position(&self, step: usize) -> usize {
        usize::from(self.pair_positions.digits()[step])
    }

    pub(crate) fn operator(&self, step: usize) -> Operator {
        let code = self.operators.digits()[step];
        match Operator::from_code(code) {
            Some(op) => op,
            None => {
                error!("Unexpected operator code {} at reduction {}", code, step);
                panic!("unexpected operator code {code}");
            }
        }
    }

    pub(crate) fn operand_label(index: usize) -> u8 {
        // index < MAX_OPERANDS
        (index + 1) as u8
    }

    /// Classify the candidate against `target`
    pub fn evaluate(&self, target: f64, epsilon: f64) -> EvaluationOutcome {
        match self.value(epsilon) {
            Ok(value) if approx_eq(value, target, epsilon) => EvaluationOutcome::Correct,
            Ok(_) => EvaluationOutcome::Incorrect,
            Err(outcome) => outcome,
        }
    }

    /// Compute the candidate's value
    ///
    /// # Errors
    ///
    /// Returns the failure outcome of the first transform or operation that
    /// cannot be performed.
    pub fn value(&self, epsilon: f64) -> Result<f64, EvaluationOutcome> {
        let mut live = [0.0_f64; MAX_OPERANDS];
        for (index, value) in live[..self.operands].iter_mut().enumerate() {
            let operand = f64::from(Self::operand_label(index));
            *value = transform_operand(operand, self.transform(index), epsilon)?;
        }

        let reductions = self.reductions();
        for step in (0..reductions).rev() {
            let position = self.pair_position(step);
            let combined = self
                .operator(step)
                .apply(live[position], live[position + 1]);
            if !combined.is_finite() {
                return Err(EvaluationOutcome::DivisionInvalid);
            }
            live[position] =
                transform_result(combined, self.transform(self.operands + step), epsilon)?;
            live.copy_within(position + 2..=reductions, position + 1);
        }

        Ok(live[0])
    }
}

fn transform_operand(
    mut value: f64,
    transform: Transform,
    epsilon: f64,
) -> Result<f64, EvaluationOutcome> {
    for _ in 0..transform.square_roots {
        value = value.sqrt();
    }
    for _ in 0..transform.factorials {
        if value > MAX_FACTORIAL_ARG as f64 {
            return Err(EvaluationOutcome::FactorialArgTooLarge);
        }
        if !is_integer(value, epsilon) {
            return Err(EvaluationOutcome::FactorialNonInteger);
        }
        value = factorial_of(value).ok_or(EvaluationOutcome::FactorialArgTooLarge)?;
    }
    Ok(value)
}

fn transform_result(
    mut value: f64,
    transform: Transform,
    epsilon: f64,
) -> Result<f64, EvaluationOutcome> {
    if transform.square_roots > 0 && value < 0.0 {
        return Err(EvaluationOutcome::SquareRootInvalid);
    }
    for _ in 0..transform.square_roots {
        value = value.sqrt();
    }

    if transform.factorials > 0 && !is_integer(value, epsilon) {
        return Err(EvaluationOutcome::FactorialNonInteger);
    }
    for _ in 0..transform.factorials {
        if value < 0.0 || value > MAX_FACTORIAL_ARG as f64 {
            return Err(EvaluationOutcome::FactorialResultTooLarge);
        }
        value = factorial_of(value).ok_or(EvaluationOutcome::FactorialResultTooLarge)?;
    }
    Ok(value)
}
