//! Shopping list observers
//!
//! Observers are notified synchronously, inline with the list operation that
//! triggered them, in the order they were registered. They are not isolated:
//! a panicking observer unwinds through the list operation and the remaining
//! observers are skipped. An observer must not call back into the list that
//! is notifying it, since the list is mutably borrowed for the whole
//! operation.

use std::rc::Rc;

use crate::item::Item;

/// Listener for changes to a shopping list
pub trait ShoppingListObserver {
    /// Called after `item` was stored; `item.id` is the id the list assigned
    fn on_item_added(&self, item: &Item);

    /// Called after `item` was taken out of the list
    fn on_item_removed(&self, item: &Item);
}

/// Shared handle under which observers are registered
pub type SharedObserver = Rc<dyn ShoppingListObserver>;
