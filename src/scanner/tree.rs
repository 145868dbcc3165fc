use super::patterns::PatternSet;
use crate::error::{Result, ScanError};
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info, span, warn};

/// Everything a single scan needs. Immutable while the scan runs.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Directory to scan
    pub root: PathBuf,
    /// Files to collect
    pub include_files: PatternSet,
    /// Directories to collect as leaves instead of descending into
    pub include_dirs: PatternSet,
    /// Suppresses entries that would otherwise be collected
    pub excludes: PatternSet,
    /// Prunes entries before any other test
    pub scan_exclude: PatternSet,
    /// Classify symlinks by their target instead of as plain entries
    pub follow_symlinks: bool,
}

impl ScanRequest {
    /// A request for `root` with every pattern set empty.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_files: PatternSet::empty(),
            include_dirs: PatternSet::empty(),
            excludes: PatternSet::empty(),
            scan_exclude: PatternSet::empty(),
            follow_symlinks: false,
        }
    }

    /// Set the file-include patterns.
    #[must_use]
    pub fn include_files(mut self, set: PatternSet) -> Self {
        self.include_files = set;
        self
    }

    /// Set the directory-include (leaf) patterns.
    #[must_use]
    pub fn include_dirs(mut self, set: PatternSet) -> Self {
        self.include_dirs = set;
        self
    }

    /// Set the exclude patterns.
    #[must_use]
    pub fn excludes(mut self, set: PatternSet) -> Self {
        self.excludes = set;
        self
    }

    /// Set the pruning patterns.
    #[must_use]
    pub fn scan_exclude(mut self, set: PatternSet) -> Self {
        self.scan_exclude = set;
        self
    }

    /// Classify symlinks by their targets, descending into linked
    /// directories.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Scan a tree using string patterns.
///
/// All four pattern lists are compiled before the filesystem is touched, so
/// an invalid pattern is reported even when `root` does not exist.
///
/// # Errors
///
/// - [`ScanError::InvalidPattern`] if any pattern fails to compile
/// - [`ScanError::NotFound`] if `root` is missing or not a directory
/// - [`ScanError::PermissionDenied`] if any directory cannot be listed
pub fn find<S: AsRef<str>>(
    root: &Path,
    include_files: &[S],
    include_dirs: &[S],
    excludes: &[S],
    scan_exclude: &[S],
) -> Result<Vec<String>> {
    let request = ScanRequest::new(root)
        .include_files(PatternSet::new(include_files)?)
        .include_dirs(PatternSet::new(include_dirs)?)
        .excludes(PatternSet::new(excludes)?)
        .scan_exclude(PatternSet::new(scan_exclude)?);

    scan(&request)
}

/// Run a scan and return matched paths relative to the root.
///
/// Results come back in directory-listing order, which the platform does not
/// guarantee; nothing is sorted. Paths always use `/` as separator.
///
/// A directory that cannot be listed anywhere in the tree fails the whole
/// scan.
///
/// # Errors
///
/// - [`ScanError::NotFound`] if the root is missing or not a directory
/// - [`ScanError::PermissionDenied`] if any directory cannot be listed
/// - [`ScanError::Io`] for other listing failures
pub fn scan(request: &ScanRequest) -> Result<Vec<String>> {
    let span = span!(Level::DEBUG, "scan", root = %request.root.display());
    let _guard = span.enter();
    debug!(
        include_files = request.include_files.len(),
        include_dirs = request.include_dirs.len(),
        excludes = request.excludes.len(),
        scan_exclude = request.scan_exclude.len(),
        "Patterns compiled"
    );

    let metadata =
        fs::metadata(&request.root).map_err(|e| ScanError::from_io(&request.root, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotFound {
            path: request.root.clone(),
        });
    }

    let found = find_in(request, "")?;
    info!(matched = found.len(), "Scan complete");
    Ok(found)
}

/// Scan one directory level below `rel_base` and return its matches, with
/// each subdirectory's matches inlined where the subdirectory was listed.
///
/// # Errors
///
/// Propagates the first listing failure from this level or any level below.
pub fn find_in(request: &ScanRequest, rel_base: &str) -> Result<Vec<String>> {
    let scan_root = if rel_base.is_empty() {
        request.root.clone()
    } else {
        request.root.join(rel_base)
    };

    let mut found = Vec::new();

    // The ReadDir handle lives for this frame only and is closed on every return.
    let entries = fs::read_dir(&scan_root).map_err(|e| ScanError::from_io(&scan_root, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::from_io(&scan_root, e))?;
        let path = join_relative(rel_base, &entry_name(&entry));

        if request.scan_exclude.is_match(&path) {
            debug!(path = %path, "Pruned");
            continue;
        }

        if is_dir(request, &entry)? {
            if request.include_dirs.is_match(&path) {
                if request.excludes.is_match(&path) {
                    debug!(path = %path, "Leaf directory excluded");
                } else {
                    debug!(path = %path, "Collected directory");
                    found.push(path);
                }
            } else if links_to_ancestor(request, rel_base, &entry)? {
                warn!(path = %path, "Symlink points back into the tree above it, not descending");
            } else {
                found.extend(find_in(request, &path)?);
            }
        } else if request.include_files.is_match(&path) && !request.excludes.is_match(&path) {
            debug!(path = %path, "Collected file");
            found.push(path);
        }
    }

    Ok(found)
}

/// Join an entry name onto the accumulated relative base with `/`.
fn join_relative(rel_base: &str, name: &str) -> String {
    if rel_base.is_empty() {
        name.to_string()
    } else {
        format!("{rel_base}/{name}")
    }
}

fn entry_name(entry: &DirEntry) -> String {
    let name = entry.file_name();
    match name.to_str() {
        Some(s) => s.to_string(),
        None => {
            let lossy = name.to_string_lossy().into_owned();
            warn!(name = %lossy, "Entry name is not valid UTF-8, matching lossily");
            lossy
        }
    }
}

fn is_dir(request: &ScanRequest, entry: &DirEntry) -> Result<bool> {
    let file_type = entry
        .file_type()
        .map_err(|e| ScanError::from_io(&entry.path(), e))?;

    if file_type.is_symlink() && request.follow_symlinks {
        return match fs::metadata(entry.path()) {
            Ok(metadata) => Ok(metadata.is_dir()),
            // Dangling links are plain entries
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ScanError::from_io(&entry.path(), e)),
        };
    }

    Ok(file_type.is_dir())
}

/// Whether `entry` is a symlink to a directory already on the path from the
/// root down to `rel_base`, or to one of their ancestors. Descending into
/// such a link would never terminate.
fn links_to_ancestor(request: &ScanRequest, rel_base: &str, entry: &DirEntry) -> Result<bool> {
    let file_type = entry
        .file_type()
        .map_err(|e| ScanError::from_io(&entry.path(), e))?;
    if !file_type.is_symlink() {
        return Ok(false);
    }

    let target = fs::canonicalize(entry.path()).map_err(|e| ScanError::from_io(&entry.path(), e))?;

    let mut dir = request.root.clone();
    let mut parts = rel_base.split('/').filter(|p| !p.is_empty());
    loop {
        let visited = fs::canonicalize(&dir).map_err(|e| ScanError::from_io(&dir, e))?;
        if visited.starts_with(&target) {
            return Ok(true);
        }
        match parts.next() {
            Some(part) => dir.push(part),
            None => return Ok(false),
        }
    }
}
