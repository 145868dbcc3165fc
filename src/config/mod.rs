/// Reading and validating configuration files.
pub mod parser;
/// Unknown-field detection.
pub mod validator;

use crate::scanner::{PatternSet, ScanRequest};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project-local configuration file looked up under the scan root.
pub const CONFIG_FILE_NAME: &str = "sweep.toml";

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "SWEEP_CONFIG_PATH";

/// Top-level configuration file contents.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Patterns selecting what `clean` removes
    #[serde(default)]
    pub clean: CleanConfig,

    /// Options applied to every scan
    #[serde(default)]
    pub scan: ScanConfig,
}

/// The clean profile: four pattern lists fed straight into a scan.
///
/// A list missing from the file keeps its built-in default; an explicit
/// empty list clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Files to remove
    pub include_files: Vec<String>,
    /// Directories to remove whole
    pub include_dirs: Vec<String>,
    /// Entries to keep even when selected
    pub excludes: Vec<String>,
    /// Entries never scanned
    pub scan_exclude: Vec<String>,
}

/// Scan options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    /// Descend into symlinked directories
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            include_files: vec![r".*\.pyc$".to_string()],
            include_dirs: vec![
                r"(.*/)?\.eggs$".to_string(),
                r".*\.egg-info$".to_string(),
                r"(.*/)?\.pytest_cache$".to_string(),
                r"(.*/)?build$".to_string(),
                r"(.*/)?dist$".to_string(),
                r"(.*/)?__pycache__$".to_string(),
            ],
            excludes: Vec::new(),
            scan_exclude: vec![r"^\.git$".to_string(), r"(.*/)?\.nox$".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML
    /// - Any pattern fails to compile
    pub fn load(path: &Path) -> Result<Self> {
        parser::parse_config_file(path)
    }

    /// Resolve and load the configuration for a scan of `root`.
    ///
    /// Lookup order: `explicit`, then `SWEEP_CONFIG_PATH`, then
    /// `<root>/sweep.toml`, then built-in defaults. The first two must exist;
    /// the project-local file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is selected but cannot be
    /// loaded.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(source = "flag", path = %path.display(), "Config resolved");
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            debug!(source = CONFIG_PATH_ENV, path = %path, "Config resolved");
            return Self::load(Path::new(&path));
        }

        let local = Self::local_path(root);
        if local.is_file() {
            debug!(source = "project", path = %local.display(), "Config resolved");
            return Self::load(&local);
        }

        debug!(source = "defaults", "Config resolved");
        Ok(Self::default())
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = self.to_toml()?;
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create config file: {}", path.display()))?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }

    /// Render as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Build a scan request for `root` from the clean profile.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern fails to compile.
    pub fn clean_request(&self, root: &Path) -> Result<ScanRequest> {
        let clean = &self.clean;
        Ok(ScanRequest::new(root)
            .include_files(PatternSet::new(&clean.include_files)?)
            .include_dirs(PatternSet::new(&clean.include_dirs)?)
            .excludes(PatternSet::new(&clean.excludes)?)
            .scan_exclude(PatternSet::new(&clean.scan_exclude)?)
            .follow_symlinks(self.scan.follow_symlinks))
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return None;
        }

        let list = |v: &[String]| v.join("\n");
        match (parts[0], parts[1]) {
            ("clean", "include_files") => Some(list(&self.clean.include_files)),
            ("clean", "include_dirs") => Some(list(&self.clean.include_dirs)),
            ("clean", "excludes") => Some(list(&self.clean.excludes)),
            ("clean", "scan_exclude") => Some(list(&self.clean.scan_exclude)),
            ("scan", "follow_symlinks") => Some(self.scan.follow_symlinks.to_string()),
            _ => None,
        }
    }

    /// Where a project-local config for `root` would live.
    #[must_use]
    pub fn local_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }
}
