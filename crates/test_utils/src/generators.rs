//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating items. Values are unvalidated
//! on purpose, so negative quantities and prices are generated too.

use proptest::prelude::*;

use core_kernel::{Amount, Quantity};
use domain_shopping::{ExternalItem, Item};

/// Strategy for quantities, including negative ones
pub fn quantity_strategy() -> impl Strategy<Value = Quantity> {
    -100i32..100i32
}

/// Strategy for prices with two decimal places
pub fn price_strategy() -> impl Strategy<Value = Amount> {
    (-100_000i64..100_000i64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy for item names, including the empty name
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z ]{1,12}",
        "[а-яА-ЯіїєІЇЄ]{1,12}",
    ]
}

/// Strategy for unsaved items
pub fn item_strategy() -> impl Strategy<Value = Item> {
    (name_strategy(), quantity_strategy(), price_strategy())
        .prop_map(|(name, quantity, price)| Item::new(name, quantity, price))
}

/// Strategy for catalogue records
pub fn external_item_strategy() -> impl Strategy<Value = ExternalItem> {
    ("ext[0-9]{1,6}", name_strategy(), quantity_strategy(), price_strategy()).prop_map(
        |(external_id, name, count, price)| ExternalItem::new(external_id, name, count, price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_generated_items_are_unsaved(item in item_strategy()) {
            prop_assert!(item.id.is_placeholder());
        }

        #[test]
        fn prop_generated_records_have_prefixed_ids(record in external_item_strategy()) {
            prop_assert!(record.external_id.as_str().starts_with("ext"));
        }
    }
}
