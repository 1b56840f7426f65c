//! Custom Test Assertions
//!
//! Assertion helpers for shopping list invariants that give more meaningful
//! messages than plain `assert!`.

use core_kernel::{Amount, ItemId};
use domain_shopping::ShoppingList;

/// Asserts that the list holds exactly the given ids, in order
pub fn assert_item_ids(list: &ShoppingList, expected: &[u64]) {
    let actual: Vec<u64> = list.items().iter().map(|item| item.id.value()).collect();
    assert_eq!(
        actual, expected,
        "List '{}' holds ids {:?}, expected {:?}",
        list.name(), actual, expected
    );
}

/// Asserts that every stored id is unique and below the list's next id
pub fn assert_id_invariant(list: &ShoppingList) {
    let next = list.next_id();
    let mut seen: Vec<ItemId> = Vec::with_capacity(list.len());

    for item in list.items() {
        assert!(
            item.id < next,
            "Item {} has id {} but next id is {}",
            item.name, item.id, next
        );
        assert!(!seen.contains(&item.id), "Duplicate id {}", item.id);
        seen.push(item.id);
    }
}

/// Asserts that two amounts differ by no more than `tolerance`
pub fn assert_amount_approx_eq(actual: Amount, expected: Amount, tolerance: Amount) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual, expected, diff, tolerance
    );
}
