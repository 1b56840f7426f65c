//! Shopping list events
//!
//! [`EventJournal`] is an observer that records every notification it
//! receives as a [`ShoppingListEvent`]. The journal gives callers an audit
//! trail of a session and can be serialized as JSON.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use core_kernel::ItemId;

use crate::item::Item;
use crate::observer::ShoppingListObserver;

/// A change observed on a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "item", rename_all = "snake_case")]
pub enum ShoppingListEvent {
    /// An item was stored under its assigned id
    ItemAdded(Item),
    /// An item was removed
    ItemRemoved(Item),
}

impl ShoppingListEvent {
    /// Returns the item carried by this event
    pub fn item(&self) -> &Item {
        match self {
            ShoppingListEvent::ItemAdded(item) => item,
            ShoppingListEvent::ItemRemoved(item) => item,
        }
    }

    /// Returns the id of the item carried by this event
    pub fn item_id(&self) -> ItemId {
        self.item().id
    }

    pub fn is_addition(&self) -> bool {
        matches!(self, ShoppingListEvent::ItemAdded(_))
    }
}

/// Observer recording events in notification order
#[derive(Debug, Default)]
pub struct EventJournal {
    events: RefCell<Vec<ShoppingListEvent>>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events
    pub fn events(&self) -> Vec<ShoppingListEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Number of recorded additions and removals
    pub fn counts(&self) -> (usize, usize) {
        let events = self.events.borrow();
        let added = events.iter().filter(|e| e.is_addition()).count();
        (added, events.len() - added)
    }

    /// Serializes the journal as a pretty-printed JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.events.borrow())
    }
}

impl ShoppingListObserver for EventJournal {
    fn on_item_added(&self, item: &Item) {
        self.events
            .borrow_mut()
            .push(ShoppingListEvent::ItemAdded(item.clone()));
    }

    fn on_item_removed(&self, item: &Item) {
        self.events
            .borrow_mut()
            .push(ShoppingListEvent::ItemRemoved(item.clone()));
    }
}
