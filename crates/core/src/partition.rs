// crates/core/src/partition.rs
//! Decomposition of an integer interval into digit-aligned sub-ranges.

use log::trace;
use range_regex_domain::SubRange;

/// Splits `[start, end]` into digit-aligned sub-ranges, ordered low to high.
///
/// Every returned sub-range can be rendered with one character class per digit
/// position. The sub-ranges are disjoint and their union is exactly
/// `[start, end]`. An empty interval (`start > end`) yields no sub-ranges.
pub fn partition(start: u64, end: u64) -> Vec<SubRange> {
    let mut out = Vec::new();
    partition_into(start, end, &mut out);
    out
}

fn partition_into(start: u64, end: u64, out: &mut Vec<SubRange>) {
    if start > end {
        return;
    }

    // No multiple of ten in [start, end]: only the last digit varies.
    let first_ending_in_0 = match start.div_ceil(10).checked_mul(10) {
        Some(first) if first <= end => first,
        _ => {
            trace!("partition [{start}, {end}] -> single decade");
            out.push(SubRange::new(start, end));
            return;
        }
    };

    if start < first_ending_in_0 {
        out.push(SubRange::new(start, first_ending_in_0 - 1));
    }

    // First value of the decade holding `end`. Everything in
    // [first_ending_in_0, last_decade_start) has an unconstrained last digit.
    let last_decade_start = end / 10 * 10;
    if let Some(upper) = (last_decade_start / 10).checked_sub(1) {
        let lower = first_ending_in_0 / 10;
        trace!("partition [{start}, {end}] -> middle [{lower}, {upper}] x10");
        let mut middle = Vec::new();
        partition_into(lower, upper, &mut middle);
        out.extend(middle.into_iter().map(SubRange::widen_last_digit));
    }

    out.push(SubRange::new(last_decade_start, end));
}
