// crates/core/src/verify.rs
//! Cross-checks generated patterns against the `regex` engine.

use std::collections::BTreeSet;

use log::{debug, trace};
use range_regex_domain::{NumericRange, RangePattern};
use range_regex_shared_kernel::{VerificationError, VerificationResult, Width};
use regex::Regex;
use serde::Serialize;

/// Default number of values probed before switching to boundary sampling.
pub const DEFAULT_PROBE_LIMIT: u64 = 100_000;

/// Summary of a successful verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Number of distinct values checked.
    pub probed: u64,
    /// `true` when every value of the width was checked.
    pub exhaustive: bool,
}

/// Full-match checker for one generated pattern.
#[derive(Debug, Clone)]
pub struct Verifier {
    pattern: String,
    regex: Regex,
    width: Option<Width>,
    boundaries: Vec<u64>,
    limit: u64,
}

impl Verifier {
    /// Compiles `pattern` for whole-string matching.
    ///
    /// `width` is the zero-padding width values are printed with, or `None` when
    /// the pattern matches canonical unpadded numbers.
    pub fn new(pattern: &RangePattern, width: Option<Width>) -> VerificationResult<Self> {
        let source = format!("^(?:{})$", pattern.as_str());
        let regex = Regex::new(&source).map_err(|source| VerificationError::Compile {
            pattern: pattern.to_string(),
            source,
        })?;
        let boundaries = pattern
            .pieces()
            .iter()
            .flat_map(|piece| [piece.range.start, piece.range.end])
            .collect();
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            width,
            boundaries,
            limit: DEFAULT_PROBE_LIMIT,
        })
    }

    /// Compiles `pattern` with the padding the generator recorded on it.
    pub fn for_pattern(pattern: &RangePattern) -> VerificationResult<Self> {
        Self::new(pattern, pattern.padding())
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Formats `value` the way the pattern expects it.
    pub fn format(&self, value: u64) -> String {
        self.width.map_or_else(|| value.to_string(), |width| width.pad(value))
    }

    pub fn is_match(&self, value: u64) -> bool {
        self.regex.is_match(&self.format(value))
    }

    /// Checks that the pattern accepts exactly the members of `range`.
    ///
    /// `None` stands for the empty range, which must match nothing. Small
    /// domains are checked exhaustively; larger ones at the sub-range
    /// boundaries and around the range edges.
    pub fn check(&self, range: Option<NumericRange>) -> VerificationResult<VerificationReport> {
        let (probes, exhaustive) = self.probes(range);
        debug!(
            "verifying '{}' with {} probe(s), exhaustive={exhaustive}",
            self.pattern,
            probes.len()
        );

        for value in &probes {
            let expected = range.is_some_and(|r| r.contains(*value));
            let text = self.format(*value);
            let actual = self.regex.is_match(&text);
            trace!("probe {text}: expected={expected} actual={actual}");
            match (expected, actual) {
                (true, false) => {
                    return Err(VerificationError::MissingMatch {
                        pattern: self.pattern.clone(),
                        value: text,
                    });
                }
                (false, true) => {
                    return Err(VerificationError::UnexpectedMatch {
                        pattern: self.pattern.clone(),
                        value: text,
                    });
                }
                _ => {}
            }
        }

        Ok(VerificationReport {
            probed: probes.len() as u64,
            exhaustive,
        })
    }

    fn probes(&self, range: Option<NumericRange>) -> (BTreeSet<u64>, bool) {
        let domain_end = self.domain_end(range);
        if domain_end < self.limit {
            return ((0..=domain_end).collect(), true);
        }

        let mut probes = BTreeSet::new();
        let mut around = |value: u64| {
            probes.extend([value.saturating_sub(1), value, value.saturating_add(1)]);
        };
        around(0);
        around(domain_end);
        if let Some(range) = range {
            around(range.start());
            around(range.end());
        }
        for boundary in &self.boundaries {
            around(*boundary);
        }
        // Keep padded probes inside the width so they stay comparable.
        probes.retain(|value| *value <= domain_end);
        (probes, false)
    }

    /// Largest value worth probing: the biggest number of the padded width, or
    /// one more digit than `range.end()` for unpadded patterns.
    fn domain_end(&self, range: Option<NumericRange>) -> u64 {
        let end = range.map_or(0, NumericRange::end);
        match self.width {
            Some(width) => 10u64
                .checked_pow(width.value() as u32)
                .map_or(u64::MAX, |bound| bound - 1),
            None => end.saturating_mul(10).saturating_add(9),
        }
    }
}
