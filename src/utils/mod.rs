//! Utility functions and helpers.
//!
//! - Disk usage of files and directory trees selected for removal
//! - Human-readable size formatting
//!
//! # Examples
//!
//! ```
//! use sweep::utils::format_size;
//!
//! assert_eq!(format_size(512), "512 B");
//! assert_eq!(format_size(1024 * 1024), "1.00 MB");
//! ```

use std::path::Path;
use walkdir::WalkDir;

/// Total size in bytes of the regular files at or below `path`.
///
/// Symlinks are not followed and entries that cannot be read are skipped;
/// the figure is informational only. A missing path counts as zero.
#[must_use]
pub fn disk_usage(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Formats a file size in bytes into a human-readable string with appropriate units.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn format_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size.round() as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
