// crates/shared-kernel/src/value_objects/width.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Number of decimal digits needed to print `value` without padding.
#[inline]
pub const fn digit_count(value: u64) -> usize {
    match value.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Fixed number of decimal digit positions used for one generated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Width(usize);

impl Width {
    pub const MIN: usize = 1;
    /// Digit count of `u64::MAX`.
    pub const MAX: usize = 20;

    pub fn new(value: usize) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidWidth {
                width: value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Width just large enough to print `value`.
    #[inline]
    pub const fn of(value: u64) -> Self {
        Self(digit_count(value))
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn fits(self, value: u64) -> bool {
        digit_count(value) <= self.0
    }

    /// Formats `value` left-padded with zeros to this width.
    ///
    /// Values wider than the width are printed in full.
    pub fn pad(self, value: u64) -> String {
        format!("{value:0width$}", width = self.0)
    }
}

impl Default for Width {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for Width {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Width> for usize {
    fn from(width: Width) -> Self {
        width.0
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
