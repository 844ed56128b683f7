#![allow(clippy::multiple_crate_versions)]

pub mod options;
pub mod pattern;
pub mod range;

pub use options::{Anchoring, EmptyRangePolicy, GroupStyle, WidthPolicy};
pub use pattern::{PatternFragment, RangePattern, RenderedSubRange};
pub use range::{NumericRange, SubRange};
