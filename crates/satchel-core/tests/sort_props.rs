// Rust guideline compliant 2026-10-18

//! Property-based tests for the insertion sorter.

use proptest::prelude::*;
use satchel_core::{insertion_sort, Item, SortCriterion};

fn arb_item() -> impl Strategy<Value = Item> {
    (
        prop::string::string_regex("[A-Za-z]{1,8}").unwrap(),
        prop::string::string_regex("[A-Za-z]{0,8}").unwrap(),
        1u8..=5u8,
    )
        .prop_map(|(name, category, priority)| Item::new(name, category, 1, priority))
}

fn arb_criterion() -> impl Strategy<Value = SortCriterion> {
    prop_oneof![
        Just(SortCriterion::Name),
        Just(SortCriterion::Category),
        Just(SortCriterion::Priority),
    ]
}

/// Sorts with the standard library using the same ordering, for reference.
fn reference_sort(items: &mut [Item], criterion: SortCriterion) {
    match criterion {
        SortCriterion::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortCriterion::Category => items.sort_by(|a, b| a.category.cmp(&b.category)),
        SortCriterion::Priority => items.sort_by(|a, b| b.priority.cmp(&a.priority)),
    }
}

/// Builds `count` items with distinct names, categories, and priorities in ascending order.
fn ascending_distinct(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(format!("item{:02}", i), format!("cat{:02}", i), 1, 1))
        .collect()
}

proptest! {
    /// Insertion sort produces the same order as a stable reference sort.
    #[test]
    fn prop_matches_stable_reference(
        items in prop::collection::vec(arb_item(), 0..20),
        criterion in arb_criterion(),
    ) {
        let mut sorted = items.clone();
        insertion_sort(&mut sorted, criterion);

        let mut expected = items;
        reference_sort(&mut expected, criterion);

        prop_assert_eq!(sorted, expected);
    }

    /// Comparisons are bounded below by n-1 and above by n(n-1)/2.
    #[test]
    fn prop_comparison_bounds(
        items in prop::collection::vec(arb_item(), 0..20),
        criterion in arb_criterion(),
    ) {
        let n = items.len();
        let mut sorted = items;
        let comparisons = insertion_sort(&mut sorted, criterion);

        prop_assert!(comparisons >= n.saturating_sub(1));
        prop_assert!(comparisons <= n * n.saturating_sub(1) / 2);
    }

    /// Already ordered input costs exactly n-1 comparisons.
    #[test]
    fn prop_sorted_input_costs_n_minus_one(
        items in prop::collection::vec(arb_item(), 0..20),
        criterion in arb_criterion(),
    ) {
        let mut ordered = items;
        reference_sort(&mut ordered, criterion);
        let n = ordered.len();

        let comparisons = insertion_sort(&mut ordered, criterion);
        prop_assert_eq!(comparisons, n.saturating_sub(1));
    }

    /// Reverse ordered input with distinct keys costs exactly n(n-1)/2 comparisons.
    #[test]
    fn prop_reversed_input_costs_quadratic(count in 0usize..20) {
        for criterion in [SortCriterion::Name, SortCriterion::Category] {
            let mut items = ascending_distinct(count);
            items.reverse();
            let comparisons = insertion_sort(&mut items, criterion);
            prop_assert_eq!(comparisons, count * count.saturating_sub(1) / 2);
            prop_assert_eq!(items, ascending_distinct(count));
        }
    }

    /// Sorting twice is a no-op the second time.
    #[test]
    fn prop_sort_is_idempotent(
        items in prop::collection::vec(arb_item(), 0..20),
        criterion in arb_criterion(),
    ) {
        let mut once = items;
        insertion_sort(&mut once, criterion);
        let mut twice = once.clone();
        insertion_sort(&mut twice, criterion);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn test_descending_priorities_cost_quadratic() {
    let mut items: Vec<Item> = (1..=5u8)
        .map(|priority| Item::new(format!("p{}", priority), "Misc", 1, priority))
        .collect();
    let comparisons = insertion_sort(&mut items, SortCriterion::Priority);
    assert_eq!(comparisons, 10);
    let priorities: Vec<u8> = items.iter().map(|item| item.priority).collect();
    assert_eq!(priorities, vec![5, 4, 3, 2, 1]);
}
