use colored::Colorize;
use std::collections::HashSet;
use tracing::warn;

/// Knows which configuration fields sweep understands
pub struct ConfigValidator {
    /// Fully qualified field names (`section.key`)
    known_fields: HashSet<&'static str>,
}

impl ConfigValidator {
    /// Create a new validator with known configuration fields
    #[must_use]
    pub fn new() -> Self {
        let known_fields = [
            "clean.include_files",
            "clean.include_dirs",
            "clean.excludes",
            "clean.scan_exclude",
            "scan.follow_symlinks",
        ]
        .into_iter()
        .collect();

        Self { known_fields }
    }

    /// Collect fields in `content` that sweep does not recognize.
    ///
    /// Content that is not valid TOML yields nothing here; the parser reports
    /// it properly.
    #[must_use]
    pub fn unknown_fields(&self, content: &str) -> Vec<String> {
        let Ok(parsed) = toml::from_str::<toml::Value>(content) else {
            return Vec::new();
        };

        let mut unknown = Vec::new();
        self.check_table(&parsed, "", &mut unknown);
        unknown
    }

    /// Print a warning for each unknown field
    pub fn warn_unknown_fields(&self, content: &str) {
        let unknown = self.unknown_fields(content);
        if unknown.is_empty() {
            return;
        }

        eprintln!("{}", "Configuration warnings:".yellow().bold());
        for field in &unknown {
            warn!(field = %field, "Unknown configuration field");
            eprintln!("  Unknown configuration field: {}", field.yellow());
        }
        eprintln!();
    }

    /// Recursively checks a TOML table for unknown fields
    fn check_table(&self, table: &toml::Value, prefix: &str, unknown: &mut Vec<String>) {
        let toml::Value::Table(map) = table else {
            return;
        };

        for (key, value) in map {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };

            if self.known_fields.contains(full_key.as_str()) {
                continue;
            }

            if matches!(value, toml::Value::Table(_)) {
                self.check_table(value, &full_key, unknown);
            } else {
                unknown.push(full_key);
            }
        }
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
