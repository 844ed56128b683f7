// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RangeRegexError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<RangeRegexError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),

    #[error("Verification error: {0}")]
    Verification(#[from] VerificationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, RangeRegexError>;

/// Errors caused by the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid range: max ({max}) is smaller than min ({min})")]
    InvalidRange { min: i64, max: i64 },

    #[error("Invalid input: {value} is negative; only non-negative integers are supported")]
    InvalidInput { value: i64 },

    #[error("Width {width} is too narrow: {required} digits are required")]
    WidthTooNarrow { width: usize, required: usize },

    #[error("Invalid width {width}: must be between {min} and {max}")]
    InvalidWidth { width: usize, min: usize, max: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Invariant violations inside the generator. These indicate a defect, not bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("Width mismatch while rendering: '{start}' and '{end}' have different lengths")]
    WidthMismatch { start: String, end: String },

    #[error("Non-digit character in rendered bound '{value}'")]
    NonDigit { value: String },
}

pub type InternalResult<T> = std::result::Result<T, InternalError>;

/// Failures reported when a generated pattern is checked against a regex engine.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[cfg(feature = "verify")]
    #[error("Pattern '{pattern}' does not compile: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern '{pattern}' should match '{value}' but does not")]
    MissingMatch { pattern: String, value: String },

    #[error("Pattern '{pattern}' should not match '{value}' but does")]
    UnexpectedMatch { pattern: String, value: String },
}

pub type VerificationResult<T> = std::result::Result<T, VerificationError>;

/// Configuration-layer errors (config files, CLI values).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config: {details}")]
    Parse { format: String, details: String },

    #[error("Unsupported config file extension: '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("Invalid value for {field}: '{value}' - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RangeRegexError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for RangeRegexError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::from(err).into()
    }
}

impl RangeRegexError {
    /// Returns the innermost error, skipping any `Context` wrappers.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Convenience accessor for the domain error at the root, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self.root() {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<RangeRegexError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RangeRegexError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RangeRegexError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
