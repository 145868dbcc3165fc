use super::Config;
use crate::scanner::PatternSet;
use anyhow::{Context, Result};
use std::path::Path;

/// Read, parse and validate a configuration file.
///
/// Unknown fields are reported as warnings but do not fail the load.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or holds
/// a pattern that does not compile.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    super::validator::ConfigValidator::new().warn_unknown_fields(&content);

    parse_config_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parse and validate configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if `content` is not valid TOML or holds a pattern that
/// does not compile.
pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse TOML config")?;

    validate_config(&config)?;
    Ok(config)
}

/// Reject patterns that do not compile, so the problem surfaces before a scan.
fn validate_config(config: &Config) -> Result<()> {
    let clean = &config.clean;
    for (name, patterns) in [
        ("clean.include_files", &clean.include_files),
        ("clean.include_dirs", &clean.include_dirs),
        ("clean.excludes", &clean.excludes),
        ("clean.scan_exclude", &clean.scan_exclude),
    ] {
        PatternSet::new(patterns).with_context(|| format!("Invalid pattern in {name}"))?;
    }

    Ok(())
}
