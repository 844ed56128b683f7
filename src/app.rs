// src/app.rs
use log::info;
use range_regex_core::{
    RangeRegex,
    domain::{NumericRange, RangePattern},
    shared::{ErrorContext, Result},
    verify::{VerificationReport, Verifier},
};

use crate::config::Config;

/// Result of one CLI invocation.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub pattern: RangePattern,
    pub verification: Option<VerificationReport>,
}

/// Generates (and optionally verifies) the pattern described by `config`.
///
/// # Errors
///
/// Propagates generation errors (negative or reversed bounds, narrow fixed
/// width) and verification failures.
pub fn run(config: &Config) -> Result<Outcome> {
    let generator = RangeRegex::new(config.generator);
    let pattern = generator
        .generate(config.min, config.max)
        .with_context(|| format!("cannot build pattern for [{}, {}]", config.min, config.max))?;
    info!("generated {} fragment(s)", pattern.pieces().len());

    let verification = if config.check {
        Some(verify(config, &pattern)?)
    } else {
        None
    };

    Ok(Outcome {
        pattern,
        verification,
    })
}

fn verify(config: &Config, pattern: &RangePattern) -> Result<VerificationReport> {
    // Generation already rejected negative bounds.
    let (lo, hi) = (config.min.unsigned_abs(), config.max.unsigned_abs());

    let mut verifier = Verifier::for_pattern(pattern)?;
    if let Some(limit) = config.check_limit {
        verifier = verifier.with_limit(limit);
    }
    let range = NumericRange::new(lo, hi);
    let report = verifier.check(range).context("pattern verification failed")?;
    info!(
        "verified {} value(s){}",
        report.probed,
        if report.exhaustive { " exhaustively" } else { "" }
    );
    Ok(report)
}
