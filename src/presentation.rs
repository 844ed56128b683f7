// src/presentation.rs
use std::io::Write;

use anyhow::Result;
use range_regex_core::verify::VerificationReport;
use serde::{Deserialize, Serialize};

use crate::{app::Outcome, config::Config};

/// Output format for the generated pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    min: i64,
    max: i64,
    width: String,
    pattern: &'a str,
    fragments: Vec<FragmentRow<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification: Option<VerificationReport>,
}

#[derive(Debug, Serialize)]
struct FragmentRow<'a> {
    start: u64,
    end: u64,
    fragment: &'a str,
}

fn build_report<'a>(outcome: &'a Outcome, config: &Config) -> Report<'a> {
    Report {
        min: config.min,
        max: config.max,
        width: config.generator.width.to_string(),
        pattern: outcome.pattern.as_str(),
        fragments: outcome
            .pattern
            .pieces()
            .iter()
            .map(|piece| FragmentRow {
                start: piece.range.start,
                end: piece.range.end,
                fragment: piece.fragment.as_str(),
            })
            .collect(),
        verification: outcome.verification,
    }
}

/// Writes `outcome` in the configured format.
///
/// # Errors
///
/// Fails when serialization or writing to `out` fails.
pub fn write_output<W: Write>(out: &mut W, outcome: &Outcome, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => write_text(out, outcome, config),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &build_report(outcome, config))?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, &build_report(outcome, config))?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(out: &mut W, outcome: &Outcome, config: &Config) -> Result<()> {
    writeln!(out, "{}", outcome.pattern)?;
    if config.explain {
        for piece in outcome.pattern.pieces() {
            writeln!(
                out,
                "  [{}, {}] -> {}",
                piece.range.start, piece.range.end, piece.fragment
            )?;
        }
        if let Some(report) = outcome.verification {
            let mode = if report.exhaustive { "exhaustive" } else { "sampled" };
            writeln!(out, "  verified {} value(s) ({mode})", report.probed)?;
        }
    }
    Ok(())
}
