// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use range_regex_shared_kernel::Width;
use serde::{Deserialize, Serialize};

/// How the digit width of a generated pattern is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WidthPolicy {
    /// Zero-pad every value to the digit count of the wider bound.
    #[default]
    Padded,
    /// No padding: every value is matched in its canonical decimal form.
    Natural,
    /// Zero-pad every value to the given width.
    Fixed(Width),
}

impl WidthPolicy {
    /// Width the padded policies render with, or `None` for `Natural`.
    pub fn padded_width(self, min: u64, max: u64) -> Option<Width> {
        match self {
            Self::Padded => Some(Width::of(min.max(max))),
            Self::Natural => None,
            Self::Fixed(width) => Some(width),
        }
    }
}

impl FromStr for WidthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "padded" | "pad" => Ok(Self::Padded),
            "natural" | "none" => Ok(Self::Natural),
            other => {
                let digits = other.strip_prefix("fixed=").unwrap_or(other);
                let value: usize = digits
                    .parse()
                    .map_err(|_| format!("Unknown width policy: {trimmed} (expected padded, natural or a number)"))?;
                Width::new(value).map(Self::Fixed).map_err(|e| e.to_string())
            }
        }
    }
}

impl fmt::Display for WidthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Padded => f.write_str("padded"),
            Self::Natural => f.write_str("natural"),
            Self::Fixed(width) => write!(f, "{width}"),
        }
    }
}

impl TryFrom<String> for WidthPolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WidthPolicy> for String {
    fn from(policy: WidthPolicy) -> Self {
        policy.to_string()
    }
}

/// Behaviour when `min > max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyRangePolicy {
    /// Fail with an invalid-range error.
    #[default]
    Reject,
    /// Produce the empty group, which matches no number.
    EmptyGroup,
}

/// Group syntax wrapped around the alternation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupStyle {
    #[default]
    Capturing,
    NonCapturing,
}

impl GroupStyle {
    pub const fn open(self) -> &'static str {
        match self {
            Self::Capturing => "(",
            Self::NonCapturing => "(?:",
        }
    }

    pub const fn close(self) -> &'static str {
        ")"
    }
}

/// Whether the pattern is anchored to the whole input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchoring {
    #[default]
    None,
    Full,
}

impl Anchoring {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Full => "^",
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Full => "$",
        }
    }
}
