use crate::error::{Result, ScanError};
use regex::Regex;
use std::borrow::Cow;
use std::fmt;

/// Ordered set of compiled path patterns.
///
/// A candidate matches the set if ANY pattern matches it starting at the
/// first character. Patterns are not required to consume the whole
/// candidate: `^a/.*` matches `a/` and `a/b/c`, and `build` matches
/// `build/lib` as well as `builder`.
#[derive(Clone, Default)]
pub struct PatternSet {
    /// Compiled patterns, in the order they were supplied
    compiled: Vec<Regex>,
}

impl PatternSet {
    /// Compile a set of patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPattern`] for the first pattern that does
    /// not compile.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = patterns
            .into_iter()
            .map(|p| {
                let pattern = p.as_ref();
                Regex::new(pattern).map_err(|source| ScanError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { compiled })
    }

    /// A set that never matches.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of patterns in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// Returns true if the set holds no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Source strings of the patterns, in order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.compiled.iter().map(Regex::as_str)
    }

    /// Test a candidate path against the set.
    ///
    /// Backslashes in `candidate` are treated as `/` so callers need not care
    /// about the platform separator.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        if self.is_empty() {
            return false;
        }

        let normalized = normalize(candidate);
        // Leftmost-first search: if any match begins at 0, the leftmost one does.
        self.compiled
            .iter()
            .any(|re| re.find(&normalized).is_some_and(|m| m.start() == 0))
    }
}

impl fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.patterns()).finish()
    }
}

/// Replace every backslash with a forward slash.
#[must_use]
pub fn normalize(candidate: &str) -> Cow<'_, str> {
    if candidate.contains('\\') {
        Cow::Owned(candidate.replace('\\', "/"))
    } else {
        Cow::Borrowed(candidate)
    }
}

/// One-shot match of `candidate` against string patterns.
///
/// Compiles `patterns` on every call; build a [`PatternSet`] when the same
/// patterns are tested repeatedly.
///
/// # Errors
///
/// Returns [`ScanError::InvalidPattern`] if any pattern fails to compile.
pub fn matches<S: AsRef<str>>(patterns: &[S], candidate: &str) -> Result<bool> {
    Ok(PatternSet::new(patterns)?.is_match(candidate))
}
