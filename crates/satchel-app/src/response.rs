// Rust guideline compliant 2026-10-18

//! JSON line shapes for a non-interactive menu session.
//!
//! Each dispatched command yields exactly one line: a [`SuccessEnvelope`]
//! carrying the [`Outcome`](crate::Outcome), an [`ErrorEnvelope`] carrying the
//! error code, or a [`NoticeEnvelope`] when the menu skipped a command (for
//! example removing from an empty inventory).

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Value of `status` on every line that is not an error.
pub const STATUS_OK: &str = "ok";

/// A command that ran; `result` is usually an `Outcome`.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    pub status: &'static str,
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    #[must_use]
    pub fn new(result: T) -> Self {
        Self {
            status: STATUS_OK,
            result,
        }
    }
}

/// A command the inventory refused or the parser rejected.
///
/// `details` carries the capacity for a full inventory, the missing name for
/// a failed search or removal, and the accepted values for a bad criterion.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

/// A menu choice that was answered without dispatching a command.
#[derive(Debug, Serialize)]
pub struct NoticeEnvelope {
    pub status: &'static str,
    pub notice: String,
}

impl NoticeEnvelope {
    #[must_use]
    pub fn new(notice: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK,
            notice: notice.into(),
        }
    }
}
