use crate::version::find_version;
use anyhow::Result;
use std::path::Path;

/// Print the `__version__` declared in `file`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or declares no version.
pub fn execute(file: &Path) -> Result<()> {
    let version = find_version(file)?;
    println!("{version}");
    Ok(())
}
