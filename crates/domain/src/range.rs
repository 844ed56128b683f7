pub mod numeric_range;
pub mod sub_range;

pub use numeric_range::NumericRange;
pub use sub_range::SubRange;
