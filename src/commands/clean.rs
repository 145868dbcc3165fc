use crate::SweepContext;
use crate::scanner;
use crate::utils::{disk_usage, format_size};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Outcome of a clean run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Paths removed (or that would be removed in a dry run)
    pub removed: Vec<String>,
    /// Paths that could not be removed
    pub failed: Vec<String>,
    /// Bytes reclaimed (or reclaimable in a dry run)
    pub bytes: u64,
}

/// Remove everything the clean profile selects under the context root.
///
/// The full selection is computed before anything is deleted. Entries that
/// no longer exist by the time they are reached are skipped; any other
/// failure is reported and counted but does not stop the run.
///
/// # Errors
///
/// Returns an error if the configured patterns are invalid or the scan fails.
pub fn execute(ctx: &SweepContext, dry_run: bool, force: bool) -> Result<CleanSummary> {
    // Safety check: require either -n or -f flag
    if !dry_run && !force {
        super::print_error("clean requires either -n (dry run) or -f (force) flag for safety");
        super::print_info("Use 'sweep clean -n' to see what would be removed");
        super::print_info("Use 'sweep clean -f' to actually remove matched files");
        return Ok(CleanSummary::default());
    }

    let request = ctx.config.clean_request(&ctx.root)?;
    let selection = scanner::scan(&request)
        .with_context(|| format!("Failed to scan {}", ctx.root.display()))?;

    if selection.is_empty() {
        super::print_info("Already clean - nothing matched");
        return Ok(CleanSummary::default());
    }

    let summary = remove_selection(ctx, selection, dry_run);

    println!();
    if dry_run {
        super::print_info(&format!(
            "{} path(s) would be removed, {} reclaimable",
            summary.removed.len(),
            format_size(summary.bytes)
        ));
        super::print_info("Run 'sweep clean -f' to actually remove these paths");
    } else {
        super::print_success(&format!(
            "Removed {} path(s), {} reclaimed",
            summary.removed.len(),
            format_size(summary.bytes)
        ));
    }
    if !summary.failed.is_empty() {
        super::print_warning(&format!("Failed to handle {} path(s)", summary.failed.len()));
    }

    Ok(summary)
}

/// Remove (or, in a dry run, list) each selected path under the context
/// root.
///
/// Paths that no longer exist are skipped. Any other failure, whether while
/// inspecting or removing a path, is warned about and recorded in
/// [`CleanSummary::failed`].
pub fn remove_selection(ctx: &SweepContext, selection: Vec<String>, dry_run: bool) -> CleanSummary {
    if dry_run {
        println!("\n{}", "Would remove the following:".yellow().bold());
    } else {
        println!("\n{}", "Removing:".red().bold());
    }

    let mut summary = CleanSummary::default();

    for rel in selection {
        let path = ctx.resolve(&rel);
        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %rel, "Vanished before removal");
                continue;
            }
            Err(e) => {
                super::print_warning(&format!("Cannot inspect {rel}: {e}"));
                summary.failed.push(rel);
                continue;
            }
        };

        let size = if metadata.is_dir() {
            disk_usage(&path)
        } else {
            metadata.len()
        };

        if dry_run {
            println!("  {} {}", "would remove:".yellow(), rel);
            summary.bytes += size;
            summary.removed.push(rel);
            continue;
        }

        match remove(&path, metadata.is_dir()) {
            Ok(()) => {
                println!("  {} {}", "removed:".red(), rel);
                summary.bytes += size;
                summary.removed.push(rel);
            }
            Err(e) => {
                super::print_warning(&format!("Failed to remove {rel}: {e}"));
                summary.failed.push(rel);
            }
        }
    }

    summary
}

fn remove(path: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::tempdir;

    fn project() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pkg/__pycache__")).unwrap();
        fs::create_dir_all(root.join("build/lib")).unwrap();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join("pkg/__init__.py"), "x").unwrap();
        fs::write(root.join("pkg/__pycache__/m.cpython.pyc"), vec![0u8; 10]).unwrap();
        fs::write(root.join("pkg/stray.pyc"), vec![0u8; 5]).unwrap();
        fs::write(root.join("build/lib/out.so"), vec![0u8; 20]).unwrap();
        fs::write(root.join(".git/objects/old.pyc"), "x").unwrap();
        dir
    }

    #[test]
    fn test_safety_check() -> Result<()> {
        let dir = project();
        let ctx = SweepContext::with_config(dir.path().to_path_buf(), Config::default());

        let summary = execute(&ctx, false, false)?;
        assert_eq!(summary, CleanSummary::default());
        assert!(dir.path().join("build").exists());
        Ok(())
    }

    #[test]
    fn test_dry_run_keeps_everything() -> Result<()> {
        let dir = project();
        let ctx = SweepContext::with_config(dir.path().to_path_buf(), Config::default());

        let mut summary = execute(&ctx, true, false)?;
        summary.removed.sort();
        assert_eq!(
            summary.removed,
            vec!["build", "pkg/__pycache__", "pkg/stray.pyc"]
        );
        assert_eq!(summary.bytes, 35);
        assert!(dir.path().join("build/lib/out.so").exists());
        assert!(dir.path().join("pkg/stray.pyc").exists());
        Ok(())
    }

    #[test]
    fn test_force_removes_selection_only() -> Result<()> {
        let dir = project();
        let root = dir.path();
        let ctx = SweepContext::with_config(root.to_path_buf(), Config::default());

        let summary = execute(&ctx, false, true)?;
        assert_eq!(summary.removed.len(), 3);
        assert!(summary.failed.is_empty());

        assert!(!root.join("build").exists());
        assert!(!root.join("pkg/__pycache__").exists());
        assert!(!root.join("pkg/stray.pyc").exists());
        assert!(root.join("pkg/__init__.py").exists());
        // Pruned by the default scan_exclude
        assert!(root.join(".git/objects/old.pyc").exists());
        Ok(())
    }

    #[test]
    fn test_vanished_entry_is_skipped() {
        let dir = project();
        let ctx = SweepContext::with_config(dir.path().to_path_buf(), Config::default());

        let selection = vec!["pkg/stray.pyc".to_string(), "pkg/gone.pyc".to_string()];
        let summary = remove_selection(&ctx, selection, false);
        assert_eq!(summary.removed, vec!["pkg/stray.pyc"]);
        assert!(summary.failed.is_empty());
        assert_eq!(summary.bytes, 5);
    }

    #[test]
    fn test_uninspectable_entry_is_counted_as_failed() {
        let dir = project();
        let ctx = SweepContext::with_config(dir.path().to_path_buf(), Config::default());

        // A file used as a directory component fails with something other than NotFound
        let selection = vec!["pkg/__init__.py/child".to_string()];
        let summary = remove_selection(&ctx, selection, true);
        assert!(summary.removed.is_empty());
        assert_eq!(summary.failed, vec!["pkg/__init__.py/child"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_removal_failure_is_counted() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = project();
        let root = dir.path();
        let ctx = SweepContext::with_config(root.to_path_buf(), Config::default());
        let pkg = root.join("pkg");
        fs::set_permissions(&pkg, fs::Permissions::from_mode(0o555))?;

        // Privileged users can write into the directory anyway
        if fs::write(pkg.join("write_check"), "").is_ok() {
            fs::set_permissions(&pkg, fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let selection = vec!["pkg/stray.pyc".to_string(), "build".to_string()];
        let summary = remove_selection(&ctx, selection, false);
        fs::set_permissions(&pkg, fs::Permissions::from_mode(0o755))?;

        assert_eq!(summary.failed, vec!["pkg/stray.pyc"]);
        assert_eq!(summary.removed, vec!["build"]);
        assert!(root.join("pkg/stray.pyc").exists());
        assert!(!root.join("build").exists());
        Ok(())
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = tempdir().unwrap();
        let ctx = SweepContext::with_config(dir.path().join("gone"), Config::default());
        assert!(execute(&ctx, true, false).is_err());
    }
}
