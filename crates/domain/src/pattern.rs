use std::fmt;

use range_regex_shared_kernel::Width;
use serde::{Deserialize, Serialize};

use crate::{
    options::{Anchoring, GroupStyle},
    range::SubRange,
};

/// Rendered regex text for one digit-aligned sub-range, e.g. `1[0-4][0-9]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternFragment(String);

impl PatternFragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PatternFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A sub-range together with the fragment rendered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSubRange {
    #[serde(flatten)]
    pub range: SubRange,
    pub width: Width,
    pub fragment: PatternFragment,
}

/// Final alternation of fragments.
///
/// An empty fragment list renders as the empty group (`()`), never as a group
/// with a dangling separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePattern {
    pattern: String,
    pieces: Vec<RenderedSubRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    padding: Option<Width>,
}

impl RangePattern {
    pub fn new(pieces: Vec<RenderedSubRange>, group: GroupStyle, anchoring: Anchoring) -> Self {
        let alternation = pieces
            .iter()
            .map(|piece| piece.fragment.as_str())
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            "{}{}{alternation}{}{}",
            anchoring.prefix(),
            group.open(),
            group.close(),
            anchoring.suffix()
        );
        Self {
            pattern,
            pieces,
            padding: None,
        }
    }

    /// Records the width every value is zero-padded to; `None` means values are
    /// written without leading zeros.
    #[must_use]
    pub fn with_padding(mut self, padding: Option<Width>) -> Self {
        self.padding = padding;
        self
    }

    pub fn padding(&self) -> Option<Width> {
        self.padding
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn pieces(&self) -> &[RenderedSubRange] {
        &self.pieces
    }

    pub fn fragments(&self) -> impl Iterator<Item = &PatternFragment> {
        self.pieces.iter().map(|piece| &piece.fragment)
    }

    /// `true` for the degenerate empty group.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn into_string(self) -> String {
        self.pattern
    }
}

impl fmt::Display for RangePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl From<RangePattern> for String {
    fn from(pattern: RangePattern) -> Self {
        pattern.pattern
    }
}
