use crate::SweepContext;
use crate::output;
use anyhow::Result;

/// Execute config command to show configuration values
///
/// With no key, prints the effective configuration as TOML. With a
/// `section.key`, prints that value (lists one entry per line).
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn execute(ctx: &SweepContext, key: Option<&str>) -> Result<()> {
    let Some(key) = key else {
        match &ctx.config_path {
            Some(path) => output::verbose(&format!("Configuration from {}", path.display())),
            None => output::verbose("Configuration resolved from project file or defaults"),
        }
        print!("{}", ctx.config.to_toml()?);
        return Ok(());
    };

    match ctx.config.get(key) {
        Some(val) if val.is_empty() => {}
        Some(val) => println!("{val}"),
        None => output::warning(&format!("Unknown configuration key '{key}'")),
    }

    Ok(())
}
