use super::{CounterError, DigitCounter, MAX_SLOTS, check_digits};

/// Counter whose slots all count from `0` to `radix` inclusive
///
/// Slots `[0, pinned)` never move, so the counter enumerates base `radix + 1`
/// numbers over slots `[pinned, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixCounter {
    digits: [u8; MAX_SLOTS],
    len: usize,
    radix: u8,
    pinned: usize,
}

impl RadixCounter {
    /// # Errors
    ///
    /// Returns an error if `len` exceeds [`MAX_SLOTS`] or `pinned > len`.
    pub fn new(len: usize, radix: u8, pinned: usize) -> Result<Self, CounterError> {
        if len > MAX_SLOTS {
            return Err(CounterError::CapacityExceeded {
                len,
                capacity: MAX_SLOTS,
            });
        }
        if pinned > len {
            return Err(CounterError::PinnedBeyondLength { pinned, len });
        }
        Ok(Self {
            digits: [0; MAX_SLOTS],
            len,
            radix,
            pinned,
        })
    }

    pub fn radix(&self) -> u8 {
        self.radix
    }

    pub fn pinned(&self) -> usize {
        self.pinned
    }

    /// Jump to the state described by `digits`
    ///
    /// # Errors
    ///
    /// Returns an error if the length differs, a digit exceeds the radix or
    /// a pinned slot is non-zero. The counter is unchanged on error.
    pub fn set_digits(&mut self, digits: &[u8]) -> Result<(), CounterError> {
        check_digits(&*self, digits, self.pinned)?;
        self.digits[..self.len].copy_from_slice(digits);
        Ok(())
    }
}

impl DigitCounter for RadixCounter {
    fn len(&self) -> usize {
        self.len
    }

    fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    fn radix_of(&self, index: usize) -> u8 {
        if index < self.pinned { 0 } else { self.radix }
    }

    fn advance(&mut self) -> bool {
        for digit in &mut self.digits[self.pinned..self.len] {
            if *digit < self.radix {
                *digit += 1;
                return true;
            }
            *digit = 0;
        }
        false
    }

    fn state_count(&self) -> u128 {
        let free_slots = u32::try_from(self.len - self.pinned).unwrap_or(u32::MAX);
        (u128::from(self.radix) + 1).saturating_pow(free_slots)
    }

    fn reset(&mut self) {
        self.digits = [0; MAX_SLOTS];
    }
}
