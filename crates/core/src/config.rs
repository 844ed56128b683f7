// crates/core/src/config.rs
use derive_builder::Builder;
use range_regex_domain::{Anchoring, EmptyRangePolicy, GroupStyle, WidthPolicy};
use serde::{Deserialize, Serialize};

/// Knobs controlling how a range is turned into a pattern.
///
/// The defaults reproduce the plain `range(min, max)` behaviour: padded width,
/// reversed bounds rejected, capturing group, no anchors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct GeneratorOptions {
    pub width: WidthPolicy,
    pub empty: EmptyRangePolicy,
    pub group: GroupStyle,
    pub anchoring: Anchoring,
}

impl GeneratorOptions {
    pub fn builder() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::default()
    }
}
