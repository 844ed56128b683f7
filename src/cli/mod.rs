mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::CliOutputFormat;

use range_regex_core::{
    GeneratorOptions,
    domain::{Anchoring, EmptyRangePolicy, GroupStyle},
    shared::{ConfigError, Result},
};

use crate::config::{Config, ConfigFile};

fn validate_check_limit(limit: Option<u64>) -> Result<()> {
    if limit == Some(0) {
        return Err(ConfigError::InvalidValue {
            field: "--check-limit".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Merge generator options: CLI flags win over the config file, which wins over defaults.
fn make_generator_options(args: &Args, file: &ConfigFile) -> Result<GeneratorOptions> {
    let mut builder = GeneratorOptions::builder();
    builder.width(args.width.or(file.width).unwrap_or_default());

    if args.allow_empty || file.allow_empty.unwrap_or(false) {
        builder.empty(EmptyRangePolicy::EmptyGroup);
    }
    if args.non_capturing {
        builder.group(GroupStyle::NonCapturing);
    } else if let Some(group) = file.group {
        builder.group(group);
    }
    if args.anchored || file.anchored.unwrap_or(false) {
        builder.anchoring(Anchoring::Full);
    }

    let options = builder.build().map_err(|e| ConfigError::InvalidValue {
        field: "generator".to_string(),
        value: String::new(),
        reason: e.to_string(),
    })?;
    Ok(options)
}

/// Convert parsed CLI arguments into a [`Config`], reading `--config` when given.
///
/// # Errors
///
/// Returns `Err` when the config file cannot be read or parsed, or when a
/// numeric flag is outside its allowed range.
pub fn build_config(args: &Args) -> Result<Config> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    build_config_with(args, &file)
}

/// Same as [`build_config`] with an already loaded config file.
///
/// # Errors
///
/// Returns `Err` when a numeric value is outside its allowed range.
pub fn build_config_with(args: &Args, file: &ConfigFile) -> Result<Config> {
    let check_limit = args.check_limit.or(file.check_limit);
    validate_check_limit(check_limit)?;

    Ok(Config {
        min: args.min,
        max: args.max,
        generator: make_generator_options(args, file)?,
        format: args.format.map(Into::into).or(file.format).unwrap_or_default(),
        explain: args.explain || file.explain.unwrap_or(false),
        check: args.check || file.check.unwrap_or(false),
        check_limit,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use range_regex_core::{
        domain::WidthPolicy,
        shared::{RangeRegexError, Width},
    };

    use super::*;
    use crate::presentation::OutputFormat;

    #[test]
    fn defaults_match_library_defaults() {
        let args = Args::parse_from(["range_regex", "1", "9"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.min, 1);
        assert_eq!(config.max, 9);
        assert_eq!(config.generator, GeneratorOptions::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.check);
    }

    #[test]
    fn flags_map_to_generator_options() {
        let args = Args::parse_from([
            "range_regex",
            "5",
            "105",
            "--width",
            "natural",
            "--allow-empty",
            "--non-capturing",
            "--anchored",
        ]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.generator.width, WidthPolicy::Natural);
        assert_eq!(config.generator.empty, EmptyRangePolicy::EmptyGroup);
        assert_eq!(config.generator.group, GroupStyle::NonCapturing);
        assert_eq!(config.generator.anchoring, Anchoring::Full);
    }

    #[test]
    fn numeric_width_is_fixed() {
        let args = Args::parse_from(["range_regex", "5", "105", "--width", "6"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.generator.width, WidthPolicy::Fixed(Width::new(6).unwrap()));
    }

    #[test]
    fn negative_bounds_parse_as_numbers() {
        let args = Args::parse_from(["range_regex", "-5", "10"]);
        assert_eq!(args.min, -5);
    }

    #[test]
    fn cli_flags_override_config_file() {
        let file = ConfigFile {
            width: Some(WidthPolicy::Natural),
            format: Some(OutputFormat::Yaml),
            group: Some(GroupStyle::NonCapturing),
            check_limit: Some(50),
            ..ConfigFile::default()
        };
        let args = Args::parse_from([
            "range_regex",
            "1",
            "2",
            "--width",
            "padded",
            "--format",
            "json",
        ]);
        let config = build_config_with(&args, &file).expect("config builds");
        assert_eq!(config.generator.width, WidthPolicy::Padded);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.generator.group, GroupStyle::NonCapturing);
        assert_eq!(config.check_limit, Some(50));
    }

    #[test]
    fn zero_check_limit_is_rejected() {
        let args = Args::parse_from(["range_regex", "1", "2", "--check", "--check-limit", "0"]);
        let err = build_config(&args).unwrap_err();
        if let RangeRegexError::Config(ConfigError::InvalidValue { field, value, .. }) = err {
            assert_eq!(field, "--check-limit");
            assert_eq!(value, "0");
        } else {
            panic!("unexpected error variant: {err:?}");
        }
    }

    #[test]
    fn check_limit_requires_check() {
        assert!(Args::try_parse_from(["range_regex", "1", "2", "--check-limit", "10"]).is_err());
    }
}
