use serde::{Deserialize, Serialize};

/// Digit-aligned piece of a [`NumericRange`](super::NumericRange) produced by the partitioner.
///
/// At the rendering width every digit position of a sub-range is either fixed or
/// spans one contiguous block of digits, independently of the other positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubRange {
    pub start: u64,
    pub end: u64,
}

impl SubRange {
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn contains(&self, value: u64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Re-expands a sub-range computed one digit shorter so that the stripped
    /// last digit spans `0-9`.
    #[inline]
    pub const fn widen_last_digit(self) -> Self {
        Self {
            start: self.start * 10,
            end: self.end * 10 + 9,
        }
    }
}
