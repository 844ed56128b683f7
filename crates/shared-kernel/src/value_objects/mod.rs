// crates/shared-kernel/src/value_objects/mod.rs
pub mod width;

pub use width::{Width, digit_count};
