// Rust guideline compliant 2026-10-18

//! Inventory state machine.
//!
//! The state is derived from the item count and the criterion of the last
//! sort that has not been invalidated by a mutation:
//!
//! - Insert / Remove → Unsorted (or Empty when no items remain)
//! - Sort(Name) → SortedByName
//! - Sort(Category | Priority) → SortedByOther
//!
//! Binary search is only allowed in SortedByName.

use crate::SortCriterion;
use serde::Serialize;

/// Observable state of an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryState {
    /// No items and no sort since the last mutation.
    Empty,
    /// Items in insertion/removal order.
    Unsorted,
    /// Ordered ascending by name; binary search is valid.
    SortedByName,
    /// Ordered by category or priority.
    SortedByOther,
}

impl InventoryState {
    /// Derives the state from the item count and the last sort criterion.
    ///
    /// # Arguments
    ///
    /// * `len` - Number of items held
    /// * `sorted_by` - Criterion of the last sort, cleared by any mutation
    #[must_use]
    pub fn derive(len: usize, sorted_by: Option<SortCriterion>) -> Self {
        match sorted_by {
            Some(SortCriterion::Name) => InventoryState::SortedByName,
            Some(_) => InventoryState::SortedByOther,
            None if len == 0 => InventoryState::Empty,
            None => InventoryState::Unsorted,
        }
    }

    /// Returns true if binary search by name may run in this state.
    #[must_use]
    pub fn allows_binary_search(self) -> bool {
        self == InventoryState::SortedByName
    }
}
