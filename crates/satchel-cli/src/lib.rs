// Rust guideline compliant 2026-10-18

//! Satchel CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod menu;
pub mod output;
pub mod terminal;

pub use menu::MenuSession;
pub use output::{create_formatter, summarize, OutputFormatter};
pub use terminal::should_use_color;
