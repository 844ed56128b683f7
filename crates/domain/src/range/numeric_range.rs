use std::fmt;

use range_regex_shared_kernel::{DomainError, DomainResult, Width};
use serde::{Deserialize, Serialize};

/// Closed, non-empty interval of non-negative integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumericRange {
    start: u64,
    end: u64,
}

impl NumericRange {
    /// Builds a range from already validated bounds.
    ///
    /// Returns `None` when `start > end`.
    pub const fn new(start: u64, end: u64) -> Option<Self> {
        if start <= end { Some(Self { start, end }) } else { None }
    }

    /// Validates signed user input.
    ///
    /// Negative bounds fail with [`DomainError::InvalidInput`] before the order is
    /// checked, so `(-5, -10)` reports the sign problem rather than the order.
    pub fn from_signed(min: i64, max: i64) -> DomainResult<Self> {
        let start = u64::try_from(min).map_err(|_| DomainError::InvalidInput { value: min })?;
        let end = u64::try_from(max).map_err(|_| DomainError::InvalidInput { value: max })?;
        Self::new(start, end).ok_or(DomainError::InvalidRange { min, max })
    }

    #[inline]
    pub const fn start(self) -> u64 {
        self.start
    }

    #[inline]
    pub const fn end(self) -> u64 {
        self.end
    }

    #[inline]
    pub const fn contains(self, value: u64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Width wide enough for both bounds.
    pub const fn natural_width(self) -> Width {
        Width::of(self.end)
    }

    /// Splits the range at powers of ten so that every piece holds numbers of a
    /// single digit count, e.g. `[5, 105]` becomes `[5, 9]`, `[10, 99]`, `[100, 105]`.
    pub fn split_by_digit_count(self) -> Vec<Self> {
        let mut pieces = Vec::new();
        let mut start = self.start;
        loop {
            let boundary = 10u64.checked_pow(Width::of(start).value() as u32);
            match boundary {
                Some(next) if next <= self.end => {
                    pieces.push(Self { start, end: next - 1 });
                    start = next;
                }
                _ => {
                    pieces.push(Self { start, end: self.end });
                    return pieces;
                }
            }
        }
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
