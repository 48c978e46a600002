// Rust guideline compliant 2026-10-18

//! Implementation of the `satchel init` command.
//!
//! Writes a configuration file holding the default settings.

use anyhow::Result;
use satchel_core::Config;
use std::path::Path;

/// Writes the default configuration to `config_path`.
///
/// # Arguments
///
/// * `config_path` - Destination of the TOML file
/// * `force` - Overwrite an existing file
///
/// # Errors
///
/// Returns an error if:
/// - The file exists and `force` is not set
/// - The file cannot be written
pub fn execute(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    Config::default().save(config_path)?;
    println!("✓ Wrote default config to {}", config_path.display());

    Ok(())
}
