// crates/core/src/render.rs
//! Per-position rendering of digit-aligned sub-ranges.

use range_regex_domain::{PatternFragment, RenderedSubRange, SubRange};
use range_regex_shared_kernel::{InternalError, InternalResult, Width};

/// Renders two equal-width digit strings into a fragment.
///
/// Positions where the bounds agree become literal digits, the others become a
/// `[a-b]` class. The result is only correct for digit-aligned bounds as
/// produced by [`crate::partition::partition`].
///
/// # Errors
///
/// [`InternalError::WidthMismatch`] when the strings differ in length and
/// [`InternalError::NonDigit`] when either contains a non-ASCII-digit byte.
pub fn render(start: &str, end: &str) -> InternalResult<PatternFragment> {
    if start.len() != end.len() {
        return Err(InternalError::WidthMismatch {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    for value in [start, end] {
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InternalError::NonDigit {
                value: value.to_string(),
            });
        }
    }

    let mut out = String::with_capacity(start.len() * 5);
    for (lo, hi) in start.chars().zip(end.chars()) {
        if lo == hi {
            out.push(lo);
        } else {
            out.push('[');
            out.push(lo);
            out.push('-');
            out.push(hi);
            out.push(']');
        }
    }
    Ok(PatternFragment::new(out))
}

/// Zero-pads both bounds of `range` to `width` and renders them.
pub fn render_sub_range(range: SubRange, width: Width) -> InternalResult<RenderedSubRange> {
    let fragment = render(&width.pad(range.start), &width.pad(range.end))?;
    Ok(RenderedSubRange {
        range,
        width,
        fragment,
    })
}
