//! External Catalogue Adapter
//!
//! An external catalogue describes products as
//! `{ "externalId", "productName", "count", "unitPrice" }`. The external id is
//! opaque: it is kept on the [`ExternalItem`] for reference and never becomes
//! the internal [`ItemId`].

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, ExternalItemId, ItemId, Quantity};

use crate::error::ShoppingError;
use crate::item::Item;

/// A product record in the external catalogue's schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalItem {
    pub external_id: ExternalItemId,
    pub product_name: String,
    pub count: Quantity,
    pub unit_price: Amount,
}

impl ExternalItem {
    pub fn new(
        external_id: impl Into<ExternalItemId>,
        product_name: impl Into<String>,
        count: Quantity,
        unit_price: Amount,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            product_name: product_name.into(),
            count,
            unit_price,
        }
    }

    /// Decodes a JSON array of catalogue records
    ///
    /// # Errors
    ///
    /// Returns `ShoppingError::MalformedFeed` if the document is not an array
    /// of records in the catalogue schema.
    pub fn parse_feed(json: &str) -> Result<Vec<ExternalItem>, ShoppingError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Converts an [`ExternalItem`] into an [`Item`]
///
/// The conversion is a plain field mapping with no validation and no side
/// effects.
#[derive(Debug, Clone)]
pub struct ItemAdapter {
    external: ExternalItem,
}

impl ItemAdapter {
    pub fn new(external: ExternalItem) -> Self {
        Self { external }
    }

    /// Returns the wrapped catalogue record
    pub fn external(&self) -> &ExternalItem {
        &self.external
    }

    /// Builds an item with the given id
    ///
    /// Callers usually pass [`ShoppingList::next_id`]. The list reassigns ids on
    /// insertion anyway, so `target_id` only matters for items used outside a
    /// list.
    ///
    /// [`ShoppingList::next_id`]: crate::list::ShoppingList::next_id
    pub fn to_item(&self, target_id: ItemId) -> Item {
        Item {
            id: target_id,
            name: self.external.product_name.clone(),
            quantity: self.external.count,
            price: self.external.unit_price,
        }
    }
}

impl From<ExternalItem> for ItemAdapter {
    fn from(external: ExternalItem) -> Self {
        Self::new(external)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_item_maps_fields() {
        let adapter = ItemAdapter::new(ExternalItem::new("ext123", "Яблука", 5, 12.0));
        let item = adapter.to_item(ItemId::new(3));

        assert_eq!(
            item,
            Item {
                id: ItemId::new(3),
                name: "Яблука".to_string(),
                quantity: 5,
                price: 12.0,
            }
        );
    }

    #[test]
    fn test_to_item_is_repeatable() {
        let adapter = ItemAdapter::from(ExternalItem::new("x", "Сир", 1, 99.5));
        assert_eq!(adapter.to_item(ItemId::FIRST), adapter.to_item(ItemId::FIRST));
        assert_eq!(adapter.external().external_id.as_str(), "x");
    }

    #[test]
    fn test_parse_feed_uses_catalogue_field_names() {
        let feed = r#"[
            {"externalId": "ext123", "productName": "Яблука", "count": 5, "unitPrice": 12.0},
            {"externalId": "ext124", "productName": "Груші", "count": -1, "unitPrice": 20}
        ]"#;

        let items = ExternalItem::parse_feed(feed).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], ExternalItem::new("ext123", "Яблука", 5, 12.0));
        assert_eq!(items[1].count, -1);
        assert_eq!(items[1].unit_price, 20.0);
    }

    #[test]
    fn test_parse_feed_rejects_internal_schema() {
        let feed = r#"[{"id": 1, "name": "Молоко", "quantity": 2, "price": 25.0}]"#;
        let err = ExternalItem::parse_feed(feed).unwrap_err();
        assert!(matches!(err, ShoppingError::MalformedFeed(_)));
    }
}
