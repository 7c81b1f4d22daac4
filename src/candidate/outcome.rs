use std::fmt;

/// Why a candidate matched the target or failed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationOutcome {
    Correct,
    /// A binary operation produced NaN or infinity
    DivisionInvalid,
    /// Factorial requested on an operand above the table range
    FactorialArgTooLarge,
    FactorialNonInteger,
    /// Factorial requested on a reduction result outside `0..=20`
    FactorialResultTooLarge,
    SquareRootInvalid,
    Incorrect,
}

impl EvaluationOutcome {
    pub const ALL: [EvaluationOutcome; 7] = [
        EvaluationOutcome::Correct,
        EvaluationOutcome::DivisionInvalid,
        EvaluationOutcome::FactorialArgTooLarge,
        EvaluationOutcome::FactorialNonInteger,
        EvaluationOutcome::FactorialResultTooLarge,
        EvaluationOutcome::SquareRootInvalid,
        EvaluationOutcome::Incorrect,
    ];

    /// Distinct bit of this outcome in a [`Verbosity`] mask
    pub fn bit(self) -> u8 {
        match self {
            EvaluationOutcome::Correct => 1,
            EvaluationOutcome::DivisionInvalid => 2,
            EvaluationOutcome::FactorialArgTooLarge => 4,
            EvaluationOutcome::FactorialNonInteger => 8,
            EvaluationOutcome::FactorialResultTooLarge => 16,
            EvaluationOutcome::SquareRootInvalid => 32,
            EvaluationOutcome::Incorrect => 64,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EvaluationOutcome::Correct => "Solution found",
            EvaluationOutcome::DivisionInvalid => "Division impossible to perform on an operator",
            EvaluationOutcome::FactorialArgTooLarge => {
                "Factorial impossible to perform on a base operand"
            }
            EvaluationOutcome::FactorialNonInteger => {
                "Factorial impossible to perform on non integer"
            }
            EvaluationOutcome::FactorialResultTooLarge => {
                "Factorial impossible to perform on an operation result"
            }
            EvaluationOutcome::SquareRootInvalid => "Square root impossible to perform",
            EvaluationOutcome::Incorrect => "Invalid candidate",
        }
    }

    pub fn is_correct(self) -> bool {
        self == EvaluationOutcome::Correct
    }
}

impl fmt::Display for EvaluationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Set of outcomes whose candidates get printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verbosity(u8);

impl Verbosity {
    pub const NONE: Verbosity = Verbosity(0);
    pub const CORRECT: Verbosity = Verbosity(1);
    pub const ALL: Verbosity = Verbosity(0x7f);

    /// Bits that match no outcome are dropped
    pub fn from_bits(bits: u8) -> Self {
        Verbosity(bits & Self::ALL.0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, outcome: EvaluationOutcome) -> bool {
        self.0 & outcome.bit() != 0
    }

    pub fn with(self, outcome: EvaluationOutcome) -> Self {
        Verbosity(self.0 | outcome.bit())
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::CORRECT
    }
}

impl FromIterator<EvaluationOutcome> for Verbosity {
    fn from_iter<I: IntoIterator<Item = EvaluationOutcome>>(iter: I) -> Self {
        iter.into_iter().fold(Verbosity::NONE, Verbosity::with)
    }
}
