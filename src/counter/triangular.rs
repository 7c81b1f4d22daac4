use super::{CounterError, DigitCounter, MAX_SLOTS, check_digits};

/// Counter where slot `i` counts from `0` to `i` inclusive
///
/// Slot 0 is always zero. A counter of length `L` has `L!` states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangularCounter {
    digits: [u8; MAX_SLOTS],
    len: usize,
}

impl TriangularCounter {
    /// # Errors
    ///
    /// Returns an error if `len` exceeds [`MAX_SLOTS`].
    pub fn new(len: usize) -> Result<Self, CounterError> {
        if len > MAX_SLOTS {
            return Err(CounterError::CapacityExceeded {
                len,
                capacity: MAX_SLOTS,
            });
        }
        Ok(Self {
            digits: [0; MAX_SLOTS],
            len,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the length differs or digit `i` exceeds `i`.
    pub fn set_digits(&mut self, digits: &[u8]) -> Result<(), CounterError> {
        check_digits(&*self, digits, 0)?;
        self.digits[..self.len].copy_from_slice(digits);
        Ok(())
    }
}

impl DigitCounter for TriangularCounter {
    fn len(&self) -> usize {
        self.len
    }

    fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    fn radix_of(&self, index: usize) -> u8 {
        // MAX_SLOTS is far below u8::MAX
        index as u8
    }

    fn advance(&mut self) -> bool {
        for (slot, digit) in self.digits[..self.len].iter_mut().enumerate() {
            if usize::from(*digit) < slot {
                *digit += 1;
                return true;
            }
            *digit = 0;
        }
        false
    }

    fn state_count(&self) -> u128 {
        (1..=self.len as u128).fold(1, u128::saturating_mul)
    }

    fn reset(&mut self) {
        self.digits = [0; MAX_SLOTS];
    }
}
