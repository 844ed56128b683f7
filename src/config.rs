// src/config.rs
use std::path::Path;

use log::debug;
use range_regex_core::{
    GeneratorOptions,
    domain::{GroupStyle, WidthPolicy},
    shared::{ConfigError, Result},
};
use serde::Deserialize;

use crate::presentation::OutputFormat;

/// Fully resolved settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub min: i64,
    pub max: i64,
    pub generator: GeneratorOptions,
    pub format: OutputFormat,
    pub explain: bool,
    pub check: bool,
    /// Probe budget for `check`; `None` uses the verifier's default.
    pub check_limit: Option<u64>,
}

/// Optional defaults read from a YAML or JSON file.
///
/// ```yaml
/// width: natural      # padded | natural | "<N>"
/// allow-empty: true
/// group: non-capturing
/// anchored: false
/// format: json
/// explain: true
/// check: true
/// check-limit: 5000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    pub width: Option<WidthPolicy>,
    pub allow_empty: Option<bool>,
    pub group: Option<GroupStyle>,
    pub anchored: Option<bool>,
    pub format: Option<OutputFormat>,
    pub explain: Option<bool>,
    pub check: Option<bool>,
    pub check_limit: Option<u64>,
}

impl ConfigFile {
    /// Reads a config file, choosing the parser from the file extension.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, has an unknown extension or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        debug!("loading config from {}", path.display());
        Self::parse(&text, &extension)
    }

    /// Parses config text in the format named by `extension` (`yaml`, `yml` or `json`).
    ///
    /// # Errors
    ///
    /// Fails on unknown formats and malformed documents.
    pub fn parse(text: &str, extension: &str) -> Result<Self> {
        match extension {
            "yaml" | "yml" => Ok(serde_yaml::from_str(text)?),
            "json" => Ok(serde_json::from_str(text)?),
            other => Err(ConfigError::UnsupportedFormat {
                extension: other.to_string(),
            }
            .into()),
        }
    }
}
