//! The shopping list aggregate
//!
//! A [`ShoppingList`] owns its items in insertion order and hands out item
//! ids from a counter that starts at [`ItemId::FIRST`] and only ever grows.
//! Ids are never reused, even after the item holding one is removed, so every
//! stored item has a unique id below [`ShoppingList::next_id`].

use std::fmt;

use tracing::{debug, warn};

use core_kernel::{Amount, ItemId};

use crate::item::Item;
use crate::observer::SharedObserver;
use crate::ports::SharedConsole;
use crate::receipt::{Receipt, ReceiptLine};

/// A named, ordered collection of items with its own id counter
pub struct ShoppingList {
    name: String,
    items: Vec<Item>,
    observers: Vec<SharedObserver>,
    next_id: ItemId,
    console: SharedConsole,
}

impl ShoppingList {
    /// Creates an empty list writing its output to `console`
    pub fn new(name: impl Into<String>, console: SharedConsole) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            observers: Vec::new(),
            next_id: ItemId::FIRST,
            console,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a stored item by id
    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Registers an observer
    ///
    /// Registering the same observer twice is allowed and doubles its
    /// notifications.
    pub fn add_observer(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
    }

    /// Returns the id the next added item will receive
    pub fn next_id(&self) -> ItemId {
        self.next_id
    }

    /// Stores `item` under a freshly issued id and notifies observers
    ///
    /// The id carried by `item` is ignored. Returns the assigned id.
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = self.next_id;
        self.next_id = id.next();

        let stored = item.with_id(id);
        debug!(list = %self.name, item_id = %id, item = %stored.name, "Item added");
        self.items.push(stored);

        let stored = &self.items[self.items.len() - 1];
        for observer in &self.observers {
            observer.on_item_added(stored);
        }
        id
    }

    /// Removes the item with `item_id` and notifies observers
    ///
    /// An unknown id is reported on the console and otherwise ignored; no
    /// observer is notified. Returns the removed item, if any.
    pub fn remove_item(&mut self, item_id: ItemId) -> Option<Item> {
        let Some(position) = self.items.iter().position(|item| item.id == item_id) else {
            warn!(list = %self.name, item_id = %item_id, "Item to remove not found");
            self.console
                .line(&format!("Товар з ID {item_id} не знайдено у списку."));
            return None;
        };

        let removed = self.items.remove(position);
        debug!(list = %self.name, item_id = %item_id, item = %removed.name, "Item removed");

        for observer in &self.observers {
            observer.on_item_removed(&removed);
        }
        Some(removed)
    }

    /// Sum of `quantity * price` over all present items
    pub fn total(&self) -> Amount {
        self.items
            .iter()
            .fold(0.0, |sum, item| sum + item.line_total())
    }

    /// Snapshot of the current contents
    pub fn receipt(&self) -> Receipt {
        Receipt::new(self.name.clone(), &self.items)
    }

    /// Writes the running listing
    pub fn display_items(&self) {
        self.console.blank();
        self.console
            .line(&format!("Список покупок '{}':", self.name));

        if self.items.is_empty() {
            self.console.line("Список порожній.");
            return;
        }

        for item in &self.items {
            self.console.line(&ReceiptLine::from(item).to_string());
        }
    }

    /// Writes the final receipt with its grand total
    pub fn print_receipt(&self) {
        self.receipt().render(self.console.as_ref());
    }
}

impl fmt::Debug for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingList")
            .field("name", &self.name)
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventJournal, ShoppingListEvent};
    use crate::ports::BufferConsole;
    use std::rc::Rc;

    fn list_with_console() -> (ShoppingList, Rc<BufferConsole>) {
        let console = Rc::new(BufferConsole::new());
        (ShoppingList::new("Тест", console.clone()), console)
    }

    #[test]
    fn test_new_list_is_empty_and_starts_at_first_id() {
        let (list, _) = list_with_console();
        assert!(list.is_empty());
        assert_eq!(list.next_id(), ItemId::FIRST);
        assert_eq!(list.name(), "Тест");
    }

    #[test]
    fn test_add_item_ignores_incoming_id() {
        let (mut list, _) = list_with_console();
        let id = list.add_item(Item::new("Молоко", 2, 25.0).with_id(ItemId::new(99)));

        assert_eq!(id, ItemId::FIRST);
        assert_eq!(list.items()[0].id, ItemId::FIRST);
        assert_eq!(list.next_id(), ItemId::new(2));
    }

    #[test]
    fn test_next_id_does_not_reserve() {
        let (list, _) = list_with_console();
        assert_eq!(list.next_id(), list.next_id());
    }

    #[test]
    fn test_ids_are_not_recycled() {
        let (mut list, _) = list_with_console();
        list.add_item(Item::new("a", 1, 1.0));
        list.add_item(Item::new("b", 1, 1.0));
        list.remove_item(ItemId::new(2));

        let id = list.add_item(Item::new("c", 1, 1.0));
        assert_eq!(id, ItemId::new(3));
    }

    #[test]
    fn test_remove_missing_reports_once_and_skips_observers() {
        let (mut list, console) = list_with_console();
        let journal = Rc::new(EventJournal::new());
        list.add_observer(journal.clone());
        list.add_item(Item::new("Хліб", 1, 15.0));

        let removed = list.remove_item(ItemId::new(7));

        assert!(removed.is_none());
        assert_eq!(list.len(), 1);
        assert_eq!(console.lines(), vec!["Товар з ID 7 не знайдено у списку."]);
        assert_eq!(journal.counts(), (1, 0));
    }

    #[test]
    fn test_observers_see_assigned_id() {
        let (mut list, _) = list_with_console();
        let journal = Rc::new(EventJournal::new());
        list.add_observer(journal.clone());

        list.add_item(Item::new("Молоко", 2, 25.0));
        list.remove_item(ItemId::FIRST);

        let events = journal.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], ShoppingListEvent::ItemAdded(item) if item.id == ItemId::FIRST));
        assert!(matches!(&events[1], ShoppingListEvent::ItemRemoved(item) if item.id == ItemId::FIRST));
    }

    #[test]
    fn test_display_empty_list() {
        let (list, console) = list_with_console();
        list.display_items();
        assert_eq!(console.lines(), vec!["", "Список покупок 'Тест':", "Список порожній."]);
    }

    #[test]
    fn test_debug_hides_observers() {
        let (mut list, _) = list_with_console();
        list.add_observer(Rc::new(EventJournal::new()));
        let debug = format!("{list:?}");
        assert!(debug.contains("observers: 1"));
    }
}
