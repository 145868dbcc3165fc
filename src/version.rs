//! Version string scraping from Python sources.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `__version__ = "x.y.z"` at the start of any line, single or double quoted.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^__version__ = ['"]([^'"]*)['"]"#).expect("version regex is valid")
});

/// Extract the first `__version__` assignment from `source`.
#[must_use]
pub fn parse_version(source: &str) -> Option<&str> {
    VERSION_RE
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Read `path` and extract its `__version__`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no version string.
pub fn find_version(path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_version(&source)
        .map(str::to_string)
        .with_context(|| format!("Unable to find version string in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_quotes() {
        assert_eq!(parse_version("__version__ = \"1.2.3\"\n"), Some("1.2.3"));
        assert_eq!(parse_version("__version__ = '1.1.0dev5'"), Some("1.1.0dev5"));
    }

    #[test]
    fn test_parse_multiline() {
        let source = "# header\nimport os\n\n__version__ = \"0.11.3\"\n__other__ = 1\n";
        assert_eq!(parse_version(source), Some("0.11.3"));
    }

    #[test]
    fn test_parse_requires_line_start() {
        assert_eq!(parse_version("x = 1; __version__ = '1.0'"), None);
        assert_eq!(parse_version("    __version__ = '1.0'"), None);
        assert_eq!(parse_version("no version here"), None);
    }

    #[test]
    fn test_find_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("__init__.py");
        std::fs::write(&path, "__version__ = \"2.0.0\"\n").unwrap();
        assert_eq!(find_version(&path).unwrap(), "2.0.0");

        std::fs::write(&path, "pass\n").unwrap();
        let err = find_version(&path).unwrap_err();
        assert!(err.to_string().contains("Unable to find version string"));
    }
}
