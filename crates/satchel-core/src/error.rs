// Rust guideline compliant 2026-10-18

//! Error types for the Satchel core library.

use thiserror::Error;

/// Result type alias for Satchel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Satchel operations.
///
/// Every variant is recoverable. Operations that fail leave the inventory untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The inventory already holds its maximum number of items.
    #[error("Inventory is full (capacity {capacity})")]
    CapacityExceeded {
        /// Fixed capacity of the inventory.
        capacity: usize,
    },

    /// No item with the given name.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Operation requires a state the inventory is not in.
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Unrecognized sort criterion.
    #[error("Invalid sort criterion: {0}")]
    InvalidCriterion(String),

    /// Invalid Item data.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    Config(String),
}
