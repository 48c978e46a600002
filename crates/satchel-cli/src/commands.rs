// Rust guideline compliant 2026-10-18

//! Command implementations for the Satchel CLI.

pub mod init;
pub mod menu;
