//! Error types for pattern compilation and tree scanning.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures surfaced by the matcher and the scanner.
///
/// All variants propagate to the immediate caller; the scanner never retries
/// and never suppresses a failure for one branch while reporting siblings.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root, or a directory below it, does not exist (or the root is
    /// not a directory).
    #[error("path not found: {}", path.display())]
    NotFound {
        /// Path that could not be found
        path: PathBuf,
    },

    /// A directory could not be listed due to access rights.
    #[error("permission denied while listing {}", path.display())]
    PermissionDenied {
        /// Directory that could not be listed
        path: PathBuf,
    },

    /// A pattern string failed to compile as a regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern, as supplied
        pattern: String,
        /// Compiler diagnostic
        #[source]
        source: regex::Error,
    },

    /// Any other I/O failure while listing a directory.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised while accessing `path`.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classification() {
        let p = Path::new("/x");
        let err = ScanError::from_io(p, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ScanError::NotFound { .. }));

        let err = ScanError::from_io(p, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ScanError::PermissionDenied { .. }));

        let err = ScanError::from_io(p, io::Error::other("boom"));
        assert!(matches!(err, ScanError::Io { .. }));
    }

    #[test]
    fn test_display_mentions_path() {
        let err = ScanError::NotFound {
            path: PathBuf::from("/missing/root"),
        };
        assert!(err.to_string().contains("/missing/root"));
    }
}
