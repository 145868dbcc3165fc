//! Command-line interface definitions for sweep.
//!
//! This module contains all CLI argument parsing structures using clap's derive macros.
//! The CLI definitions are shared between the main binary and build tools (like xtask)
//! for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes (#[arg(help = "...")]),
//! so we allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for sweep.
#[derive(Parser)]
#[command(
    name = "sweep",
    version = crate::VERSION,
    about = "Find and remove build artifacts and junk files",
    long_about = "Selects paths in a project tree with regular-expression pattern sets \
                  and lists or removes them"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (falls back to $SWEEP_CONFIG_PATH, then <ROOT>/sweep.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List paths matching the given patterns (or the clean profile)
    Find(FindArgs),

    /// Remove paths selected by the clean profile
    Clean {
        /// Directory to clean
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Dry run - only show what would be removed
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Force removal of matched paths
        #[arg(short, long)]
        force: bool,
    },

    /// Print the __version__ declared in a Python source file
    Version {
        /// File to read
        file: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Directory whose configuration to resolve
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Configuration key (section.key) to print
        key: Option<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Pattern for files to collect (repeatable)
    #[arg(long = "file", value_name = "PATTERN")]
    pub files: Vec<String>,

    /// Pattern for directories to collect without descending (repeatable)
    #[arg(long = "dir", value_name = "PATTERN")]
    pub dirs: Vec<String>,

    /// Pattern for entries to leave out of the result (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Pattern for entries to prune from the scan entirely (repeatable)
    #[arg(long = "scan-exclude", value_name = "PATTERN")]
    pub scan_exclude: Vec<String>,

    /// Classify symlinks by their targets and descend into linked directories
    #[arg(long)]
    pub follow_symlinks: bool,
}

impl From<FindArgs> for crate::commands::find::FindPatterns {
    fn from(args: FindArgs) -> Self {
        Self {
            files: args.files,
            dirs: args.dirs,
            excludes: args.excludes,
            scan_exclude: args.scan_exclude,
            follow_symlinks: args.follow_symlinks,
        }
    }
}
