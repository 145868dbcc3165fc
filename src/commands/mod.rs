//! Command implementations and the status-line helpers they share.
//!
//! Success and info lines go to stdout next to the command's own listing;
//! warnings and errors go to stderr.

/// `sweep clean`
pub mod clean;
/// `sweep config`
pub mod config;
/// `sweep find`
pub mod find;
/// `sweep version`
pub mod version;

use crate::output::{Verbosity, get_verbosity};
use colored::Colorize;

/// Print a success line to stdout (hidden when quiet).
pub fn print_success(message: &str) {
    if get_verbosity() == Verbosity::Quiet {
        return;
    }
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an informational line to stdout (hidden when quiet).
pub fn print_info(message: &str) {
    if get_verbosity() == Verbosity::Quiet {
        return;
    }
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning line to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}
