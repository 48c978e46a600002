// Rust guideline compliant 2026-10-18

//! Order-sensitive insertion sort.
//!
//! The sorter counts every ordering-predicate evaluation, including the final
//! failing check that stops a shift. That count is shown to the user, so it must
//! match a textbook insertion sort exactly:
//!
//! - already ordered input of `n` items costs `n - 1` comparisons
//! - reverse ordered input with distinct keys costs `n * (n - 1) / 2`

use crate::{Error, Item, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key used to order the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Ascending by name.
    Name,
    /// Ascending by category.
    Category,
    /// Descending by priority (highest first).
    Priority,
}

impl SortCriterion {
    /// All criteria in menu order.
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Name,
        SortCriterion::Category,
        SortCriterion::Priority,
    ];

    /// Returns the menu number of the criterion (1-3).
    #[must_use]
    pub fn menu_number(self) -> u8 {
        match self {
            SortCriterion::Name => 1,
            SortCriterion::Category => 2,
            SortCriterion::Priority => 3,
        }
    }

    /// Returns true if `placed` must move right of `current`.
    ///
    /// The comparison is strict, so equal keys never shift.
    #[must_use]
    pub fn ranks_after(self, placed: &Item, current: &Item) -> bool {
        match self {
            SortCriterion::Name => placed.name.as_bytes() > current.name.as_bytes(),
            SortCriterion::Category => placed.category.as_bytes() > current.category.as_bytes(),
            SortCriterion::Priority => placed.priority < current.priority,
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortCriterion::Name => "name",
            SortCriterion::Category => "category",
            SortCriterion::Priority => "priority",
        };
        f.write_str(label)
    }
}

impl FromStr for SortCriterion {
    type Err = Error;

    /// Parses a menu number (`1`-`3`) or a criterion name.
    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "1" | "name" => Ok(SortCriterion::Name),
            "2" | "category" | "type" => Ok(SortCriterion::Category),
            "3" | "priority" => Ok(SortCriterion::Priority),
            _ => Err(Error::InvalidCriterion(trimmed.to_string())),
        }
    }
}

/// Outcome of a sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortReport {
    /// Criterion the items were ordered by.
    pub criterion: SortCriterion,
    /// Number of ordering-predicate evaluations.
    pub comparisons: usize,
}

/// Sorts `items` in place by `criterion` using insertion sort.
///
/// # Arguments
///
/// * `items` - The items to sort (modified in place)
/// * `criterion` - The ordering key
///
/// # Returns
///
/// The number of comparisons performed.
pub fn insertion_sort(items: &mut [Item], criterion: SortCriterion) -> usize {
    let mut comparisons = 0;

    for i in 1..items.len() {
        // items[i] is the held element; it stays put until the slot is found.
        let mut slot = i;
        while slot > 0 {
            comparisons += 1;
            if criterion.ranks_after(&items[slot - 1], &items[i]) {
                slot -= 1;
            } else {
                break;
            }
        }
        items[slot..=i].rotate_right(1);
    }

    comparisons
}
