//! Odometer-style digit counters used to enumerate candidates
//!
//! A counter is a fixed-capacity array of small digits. Advancing it
//! increments the lowest advanceable slot and carries into the next one,
//! exactly like an odometer. Two radix layouts are provided:
//!
//! * [`RadixCounter`]: every slot shares one radix, and a prefix of slots
//!   can be pinned at zero.
//! * [`TriangularCounter`]: slot `i` counts up to `i`, which enumerates every
//!   sequence of adjacent-pair reductions over a shrinking list.

mod errors;
mod radix;
mod triangular;

pub use errors::CounterError;
pub use radix::RadixCounter;
pub use triangular::TriangularCounter;

/// Number of operands the inline storage can hold
pub const MAX_OPERANDS: usize = 8;

/// Digits per counter: one per operand plus one per reduction result
pub const MAX_SLOTS: usize = 2 * MAX_OPERANDS - 1;

/// Common interface of the digit counters
pub trait DigitCounter {
    /// Number of slots
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All digits, least significant first
    fn digits(&self) -> &[u8];

    /// Largest value slot `index` may hold
    fn radix_of(&self, index: usize) -> u8;

    /// # Errors
    ///
    /// Returns [`CounterError::IndexOutOfRange`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<u8, CounterError> {
        self.digits()
            .get(index)
            .copied()
            .ok_or(CounterError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Move to the next state. Returns `false` once the counter wraps
    /// around, leaving every digit at zero.
    fn advance(&mut self) -> bool;

    /// Number of distinct states, saturating at `u128::MAX`
    fn state_count(&self) -> u128;

    /// Set every digit back to zero
    fn reset(&mut self);
}

/// Validate a digit sequence against a counter's layout
fn check_digits<C: DigitCounter + ?Sized>(
    counter: &C,
    digits: &[u8],
    pinned: usize,
) -> Result<(), CounterError> {
    if digits.len() != counter.len() {
        return Err(CounterError::LengthMismatch {
            expected: counter.len(),
            actual: digits.len(),
        });
    }
    for (index, &digit) in digits.iter().enumerate() {
        if index < pinned && digit != 0 {
            return Err(CounterError::PinnedDigit { index, digit });
        }
        let radix = counter.radix_of(index);
        if digit > radix {
            return Err(CounterError::DigitOutOfRange {
                index,
                digit,
                radix,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
