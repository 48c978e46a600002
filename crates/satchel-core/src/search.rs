// Rust guideline compliant 2026-10-18

//! Search by item name.
//!
//! Linear search works on any ordering. Binary search assumes the slice is
//! ordered by name; the sortedness gate lives on [`crate::Inventory`].

use crate::Item;
use serde::Serialize;
use std::cmp::Ordering;

/// How an item was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    /// Front-to-back scan.
    Linear,
    /// Halving search over name-sorted items.
    Binary,
}

/// Result of a search, successful or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Search strategy used.
    pub method: SearchMethod,
    /// Position of the match, if any.
    pub index: Option<usize>,
    /// Number of names compared against the target.
    pub probes: usize,
}

impl SearchReport {
    /// Returns true if an item matched.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

/// Scans `items` from the front for the first exact name match.
///
/// # Arguments
///
/// * `items` - Items in any order
/// * `name` - Name to look for (case-sensitive)
pub fn linear_search_by_name(items: &[Item], name: &str) -> SearchReport {
    let mut probes = 0;
    let mut index = None;

    for (position, item) in items.iter().enumerate() {
        probes += 1;
        if item.name == name {
            index = Some(position);
            break;
        }
    }

    SearchReport {
        method: SearchMethod::Linear,
        index,
        probes,
    }
}

/// Binary search for `name` over items ordered ascending by name.
///
/// Probes the midpoint `(low + high) / 2` of the inclusive range `[low, high]`.
/// With duplicate names any one of them may be returned.
///
/// # Arguments
///
/// * `items` - Items sorted ascending by name
/// * `name` - Name to look for (case-sensitive)
pub fn binary_search_by_name(items: &[Item], name: &str) -> SearchReport {
    let mut probes = 0;
    let mut index = None;

    // `high` is exclusive so the range never underflows.
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = (low + high - 1) / 2;
        probes += 1;
        match items[mid].name.as_bytes().cmp(name.as_bytes()) {
            Ordering::Equal => {
                index = Some(mid);
                break;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    SearchReport {
        method: SearchMethod::Binary,
        index,
        probes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_items() -> Vec<Item> {
        ["Axe", "Bandage", "Map", "Rope", "Torch"]
            .iter()
            .map(|name| Item::new(*name, "Misc", 1, 3))
            .collect()
    }

    #[test]
    fn test_linear_finds_first_duplicate() {
        let items = vec![
            Item::new("Rope", "Tool", 1, 3),
            Item::new("Rope", "Spare", 2, 1),
        ];
        let report = linear_search_by_name(&items, "Rope");
        assert_eq!(report.index, Some(0));
        assert_eq!(report.probes, 1);
    }

    #[test]
    fn test_linear_miss_scans_everything() {
        let items = sorted_items();
        let report = linear_search_by_name(&items, "Compass");
        assert!(!report.is_found());
        assert_eq!(report.probes, items.len());
    }

    #[test]
    fn test_binary_hits_every_item() {
        let items = sorted_items();
        for (expected, item) in items.iter().enumerate() {
            let report = binary_search_by_name(&items, &item.name);
            assert_eq!(report.index, Some(expected));
            assert_eq!(report.method, SearchMethod::Binary);
        }
    }

    #[test]
    fn test_binary_probes_midpoint_first() {
        let items = sorted_items();
        let report = binary_search_by_name(&items, "Map");
        assert_eq!(report.index, Some(2));
        assert_eq!(report.probes, 1);
    }

    #[test]
    fn test_binary_misses_outside_range() {
        let items = sorted_items();
        assert!(!binary_search_by_name(&items, "Aardvark").is_found());
        assert!(!binary_search_by_name(&items, "Zebra").is_found());
        assert!(!binary_search_by_name(&items, "Lamp").is_found());
    }

    #[test]
    fn test_binary_on_empty() {
        let report = binary_search_by_name(&[], "X");
        assert!(!report.is_found());
        assert_eq!(report.probes, 0);
    }
}
