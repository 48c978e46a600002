// Rust guideline compliant 2026-10-18

//! Satchel Core Library
//!
//! This crate provides the foundational components for the Satchel inventory manager:
//! - Data models (Item and its field bounds)
//! - Item store (fixed-capacity, order-preserving inventory)
//! - Insertion sort with comparison counting
//! - Linear and binary search by name
//! - Inventory state tracking (sortedness gate for binary search)
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod search;
pub mod sort;
pub mod state;

pub use config::{Config, OutputFormat, DEFAULT_CONFIG_FILE};
pub use error::{Error, Result};
pub use inventory::{Inventory, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use models::{Item, MAX_CATEGORY_LEN, MAX_NAME_LEN, MAX_PRIORITY, MIN_PRIORITY};
pub use search::{binary_search_by_name, linear_search_by_name, SearchMethod, SearchReport};
pub use sort::{insertion_sort, SortCriterion, SortReport};
pub use state::InventoryState;
