// Rust guideline compliant 2026-10-18

//! Implementation of the `satchel menu` command (the default).
//!
//! Runs the interactive session on stdin/stdout with a fresh inventory.

use crate::menu::MenuSession;
use crate::output::create_formatter;
use crate::terminal::color_choice;
use anyhow::Result;
use satchel_core::{Config, Inventory};
use termcolor::StandardStream;

/// Runs an interactive session.
///
/// # Arguments
///
/// * `config` - Effective configuration (capacity, output format, color)
///
/// # Errors
///
/// Returns an error if:
/// - The configured capacity is invalid
/// - Reading stdin or writing stdout fails
pub fn execute(config: &Config) -> Result<()> {
    let inventory = Inventory::new(config.capacity)?;
    let formatter = create_formatter(config.output_format);
    let stdout = StandardStream::stdout(color_choice(config.color));
    let stdin = std::io::stdin();

    let mut session = MenuSession::new(inventory, stdin.lock(), stdout, formatter.as_ref());
    session.run()?;

    Ok(())
}
