// crates/core/src/compose.rs
use log::debug;
use range_regex_domain::{EmptyRangePolicy, NumericRange, RangePattern, RenderedSubRange, WidthPolicy};
use range_regex_shared_kernel::{DomainError, Result, Width};

use crate::{config::GeneratorOptions, partition::partition, render::render_sub_range};

/// Configurable range-to-regex generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeRegex {
    options: GeneratorOptions,
}

impl RangeRegex {
    pub const fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Builds the pattern matching every integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] when either bound is negative.
    /// - [`DomainError::InvalidRange`] when `min > max` and the empty-range policy
    ///   is [`EmptyRangePolicy::Reject`].
    /// - [`DomainError::WidthTooNarrow`] when a fixed width cannot hold `max`.
    pub fn generate(&self, min: i64, max: i64) -> Result<RangePattern> {
        match NumericRange::from_signed(min, max) {
            Ok(range) => self.generate_range(range),
            Err(DomainError::InvalidRange { .. })
                if self.options.empty == EmptyRangePolicy::EmptyGroup =>
            {
                debug!("range [{min}, {max}] is empty; emitting empty group");
                // Both bounds passed the sign check.
                let padding = self
                    .options
                    .width
                    .padded_width(min.unsigned_abs(), max.unsigned_abs());
                Ok(self.assemble(Vec::new(), padding))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Builds the pattern for an already validated range.
    pub fn generate_range(&self, range: NumericRange) -> Result<RangePattern> {
        let padding = self.options.width.padded_width(range.start(), range.end());
        let pieces = match padding {
            Some(width) => {
                if !width.fits(range.end()) {
                    return Err(DomainError::WidthTooNarrow {
                        width: width.value(),
                        required: range.natural_width().value(),
                    }
                    .into());
                }
                render_range(range, width)?
            }
            None => {
                let mut pieces = Vec::new();
                for segment in range.split_by_digit_count() {
                    pieces.extend(render_range(segment, segment.natural_width())?);
                }
                pieces
            }
        };

        debug!(
            "range {range} ({}) -> {} fragment(s)",
            self.options.width,
            pieces.len()
        );
        Ok(self.assemble(pieces, padding))
    }

    fn assemble(&self, pieces: Vec<RenderedSubRange>, padding: Option<Width>) -> RangePattern {
        RangePattern::new(pieces, self.options.group, self.options.anchoring).with_padding(padding)
    }
}

fn render_range(range: NumericRange, width: Width) -> Result<Vec<RenderedSubRange>> {
    partition(range.start(), range.end())
        .into_iter()
        .map(|sub| render_sub_range(sub, width).map_err(Into::into))
        .collect()
}

/// Returns a regex matching the zero-padded decimal form of every integer in
/// `[min, max]`, using the default [`GeneratorOptions`].
///
/// ```
/// assert_eq!(range_regex_core::range(1, 9).unwrap(), "([1-9])");
/// assert_eq!(range_regex_core::range(5, 105).unwrap(), "(00[5-9]|0[1-9][0-9]|10[0-5])");
/// ```
///
/// # Errors
///
/// Fails for negative bounds and for `min > max`; see [`RangeRegex::generate`].
pub fn range(min: i64, max: i64) -> Result<String> {
    RangeRegex::default().generate(min, max).map(String::from)
}

/// Same as [`range`] with the empty-range policy switched to the empty group,
/// so `min > max` yields `()` instead of an error.
pub fn range_or_empty(min: i64, max: i64) -> Result<String> {
    let options = GeneratorOptions {
        empty: EmptyRangePolicy::EmptyGroup,
        ..GeneratorOptions::default()
    };
    RangeRegex::new(options).generate(min, max).map(String::from)
}

impl From<WidthPolicy> for RangeRegex {
    fn from(width: WidthPolicy) -> Self {
        Self::new(GeneratorOptions {
            width,
            ..GeneratorOptions::default()
        })
    }
}
