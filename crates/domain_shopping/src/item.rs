//! Shopping list items

use serde::{Deserialize, Serialize};

use core_kernel::{line_total, Amount, ItemId, Quantity};

/// A purchasable entry in a shopping list
///
/// Items are built with [`ItemId::PLACEHOLDER`]; the list they are added to
/// replaces the id with one from its own counter. No field is validated, so
/// negative quantities or prices and empty names are all accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: Quantity,
    /// Unit price
    pub price: Amount,
}

impl Item {
    /// Creates an item that has not been assigned to a list yet
    pub fn new(name: impl Into<String>, quantity: Quantity, price: Amount) -> Self {
        Self {
            id: ItemId::PLACEHOLDER,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Returns the same item carrying a different id
    pub fn with_id(self, id: ItemId) -> Self {
        Self { id, ..self }
    }

    /// Returns `quantity * price`
    pub fn line_total(&self) -> Amount {
        line_total(self.quantity, self.price)
    }
}
