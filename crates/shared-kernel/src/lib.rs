// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ConfigError, ConfigResult, DomainError, DomainResult, ErrorContext, InternalError, InternalResult,
    RangeRegexError, Result, VerificationError, VerificationResult,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Width, digit_count};
