use crate::SweepContext;
use crate::output;
use crate::scanner::{self, PatternSet, ScanRequest};
use anyhow::{Context, Result};

/// Pattern lists given on the command line for `sweep find`.
#[derive(Debug, Clone, Default)]
pub struct FindPatterns {
    /// Files to collect
    pub files: Vec<String>,
    /// Directories to collect as leaves
    pub dirs: Vec<String>,
    /// Entries to suppress
    pub excludes: Vec<String>,
    /// Entries to prune
    pub scan_exclude: Vec<String>,
    /// Classify symlinks by their targets
    pub follow_symlinks: bool,
}

impl FindPatterns {
    /// Returns true when no pattern list was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
            && self.dirs.is_empty()
            && self.excludes.is_empty()
            && self.scan_exclude.is_empty()
    }
}

/// Build the scan request for `find`: explicit patterns when given,
/// otherwise the configured clean profile.
///
/// # Errors
///
/// Returns an error if any pattern fails to compile.
pub fn build_request(ctx: &SweepContext, patterns: &FindPatterns) -> Result<ScanRequest> {
    if patterns.is_empty() {
        output::verbose("No patterns given, using the clean profile");
        let request = ctx.config.clean_request(&ctx.root)?;
        let follow = request.follow_symlinks || patterns.follow_symlinks;
        return Ok(request.follow_symlinks(follow));
    }

    Ok(ScanRequest::new(&ctx.root)
        .include_files(PatternSet::new(&patterns.files)?)
        .include_dirs(PatternSet::new(&patterns.dirs)?)
        .excludes(PatternSet::new(&patterns.excludes)?)
        .scan_exclude(PatternSet::new(&patterns.scan_exclude)?)
        .follow_symlinks(patterns.follow_symlinks))
}

/// Scan and return the matched paths.
///
/// # Errors
///
/// Returns an error if a pattern is invalid or the scan fails.
pub fn collect(ctx: &SweepContext, patterns: &FindPatterns) -> Result<Vec<String>> {
    let request = build_request(ctx, patterns)?;
    scanner::scan(&request).with_context(|| format!("Failed to scan {}", ctx.root.display()))
}

/// Print matched paths, one per line, in the order the scan produced them.
///
/// # Errors
///
/// Returns an error if a pattern is invalid or the scan fails.
pub fn execute(ctx: &SweepContext, patterns: &FindPatterns) -> Result<()> {
    let found = collect(ctx, patterns)?;

    for path in &found {
        println!("{path}");
    }
    output::verbose(&format!("{} path(s) matched", found.len()));

    Ok(())
}
