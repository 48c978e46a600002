// Rust guideline compliant 2026-10-18

//! Terminal UI utilities for the Satchel CLI.
//!
//! This module provides color detection and colored status lines. Every
//! writer is a `WriteColor`, so tests can capture output through
//! `termcolor::NoColor`.

use std::env;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Maps the color decision to a termcolor choice for standard streams.
#[must_use]
pub fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Writes a status message with a colored prefix.
///
/// # Arguments
/// * `out` - The destination
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_status<W: WriteColor>(
    out: &mut W,
    prefix: &str,
    prefix_color: Color,
    message: &str,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true))?;
    write!(out, "{} ", prefix)?;
    out.reset()?;
    writeln!(out, "{}", message)
}

/// Writes a success message.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_success<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    write_status(out, "✓", Color::Green, message)
}

/// Writes an error message.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_error<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    write_status(out, "✗", Color::Red, message)
}

/// Writes a warning message.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_warning<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    write_status(out, "⚠", Color::Yellow, message)
}

/// Writes an info message.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_info<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    write_status(out, "ℹ", Color::Cyan, message)
}
