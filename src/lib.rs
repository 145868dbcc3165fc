#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::float_arithmetic)] // Required for file size formatting
#![allow(clippy::indexing_slicing)] // Bounds checked by logic

//! # Sweep - Working Tree Sweeper
//!
//! Sweep finds build artifacts and junk files in a project tree and removes
//! them. Selection is driven by four regular-expression pattern sets matched
//! against paths relative to the scan root:
//!
//! - **include files**: files to collect
//! - **include dirs**: directories to collect whole, without descending
//! - **excludes**: entries that would be collected but must not be
//! - **scan exclude**: entries pruned before anything else is decided
//!
//! ## Architecture
//!
//! - [`scanner`]: Pattern sets and the recursive tree scan
//! - [`error`]: Scan error taxonomy
//! - [`config`]: Configuration parsing and validation
//! - [`commands`]: Command implementations (find, clean, version, config)
//! - [`output`]: Output styling and verbosity
//! - [`utils`]: Size accounting helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let junk = sweep::scanner::find(
//!     Path::new("."),
//!     &[r".*\.pyc$"],
//!     &[r"(.*/)?__pycache__$"],
//!     &[],
//!     &[r"^\.git$"],
//! )?;
//!
//! for path in junk {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Configuration parsing, validation, and management.
pub mod config;

/// Error types for the matcher and scanner.
pub mod error;

/// Output formatting and verbosity control.
pub mod output;

/// Pattern matching and recursive tree scanning.
pub mod scanner;

/// Utility functions and helpers.
pub mod utils;

/// `__version__` extraction from Python sources.
pub mod version;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use error::ScanError;

/// Current version of the sweep binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Central context for sweep commands.
///
/// Holds the scan root and the configuration resolved for it.
///
/// # Examples
///
/// ```no_run
/// use sweep::SweepContext;
///
/// # fn main() -> anyhow::Result<()> {
/// // Use ./sweep.toml if present, otherwise defaults
/// let ctx = SweepContext::new(".".into(), None)?;
///
/// // Use an explicit configuration file
/// let ctx = SweepContext::new(".".into(), Some("ci/sweep.toml".into()))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SweepContext {
    /// Directory that scans start from.
    pub root: PathBuf,

    /// Configuration file given explicitly, if any.
    pub config_path: Option<PathBuf>,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl SweepContext {
    /// Creates a context for `root`, resolving configuration as described in
    /// [`config::Config::resolve`].
    ///
    /// # Errors
    ///
    /// Returns an error if a selected configuration file cannot be loaded.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self> {
        let config = config::Config::resolve(&root, config_path.as_deref())
            .context("Failed to load configuration")?;

        Ok(Self {
            root,
            config_path,
            config,
        })
    }

    /// Creates a context with an already loaded configuration.
    #[must_use]
    pub const fn with_config(root: PathBuf, config: config::Config) -> Self {
        Self {
            root,
            config_path: None,
            config,
        }
    }

    /// Absolute location of a path reported by a scan of this context's root.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(Path::new(relative))
    }
}
