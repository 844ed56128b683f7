// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Generation of regular expressions matching a closed range of non-negative
//! integers in decimal notation.
//!
//! The work is split in three steps: [`partition`](partition::partition) cuts
//! the range into digit-aligned sub-ranges, [`render`](render::render) turns
//! each into a per-position fragment, and [`RangeRegex`] joins the fragments.

pub mod compose;
pub mod config;
pub mod partition;
pub mod render;
#[cfg(feature = "verify")]
pub mod verify;

pub use compose::{RangeRegex, range, range_or_empty};
pub use config::{GeneratorOptions, GeneratorOptionsBuilder};
pub use range_regex_domain as domain;
pub use range_regex_shared_kernel as shared;
pub use range_regex_shared_kernel::{RangeRegexError, Result};
