// Rust guideline compliant 2026-10-18

//! Shared application services for Satchel.
//!
//! This crate sits between the inventory core and any front end. It parses
//! raw field values into typed commands, dispatches them against a
//! caller-owned inventory, and maps failures to stable error codes and
//! response envelopes.

pub mod command;
pub mod dispatch;
pub mod error;
pub mod response;

pub use command::{
    parse_criterion, parse_item, parse_menu_option, parse_priority, parse_quantity, Command,
    MenuOption,
};
pub use dispatch::{execute, Outcome};
pub use error::{AppError, ErrorCode, Result};
pub use response::{ErrorEnvelope, NoticeEnvelope, SuccessEnvelope, STATUS_OK};
