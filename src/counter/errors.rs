use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("Digit index {index} out of range for a counter of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Counter length {len} exceeds the inline capacity of {capacity} digits")]
    CapacityExceeded { len: usize, capacity: usize },
    #[error("Cannot pin {pinned} slots of a counter of length {len}")]
    PinnedBeyondLength { pinned: usize, len: usize },
    #[error("Expected {expected} digits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Digit {digit} at index {index} exceeds radix {radix}")]
    DigitOutOfRange { index: usize, digit: u8, radix: u8 },
    #[error("Pinned slot {index} must stay zero, got {digit}")]
    PinnedDigit { index: usize, digit: u8 },
}
