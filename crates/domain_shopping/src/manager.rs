//! Shopping List Registry
//!
//! The [`ShoppingListManager`] maps list names to lists. It is an ordinary
//! value: whoever constructs it owns it, and there is no process-wide
//! instance.
//!
//! Creating a list under a name that is already registered replaces the
//! earlier list without warning. The replaced list stays alive only through
//! handles callers kept before the overwrite.
//!
//! # Usage
//!
//! ```rust
//! use domain_shopping::{Item, ShoppingListManager, StdoutConsole};
//!
//! let mut manager = ShoppingListManager::new(StdoutConsole::shared());
//! let weekly = manager.create_list("Weekly");
//! weekly.borrow_mut().add_item(Item::new("Хліб", 1, 15.0));
//!
//! let again = manager.list("Weekly").expect("registered");
//! assert_eq!(again.borrow().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::error::ShoppingError;
use crate::list::ShoppingList;
use crate::ports::SharedConsole;

/// Shared handle to a registered list
pub type SharedShoppingList = Rc<RefCell<ShoppingList>>;

/// Registry of shopping lists keyed by name
pub struct ShoppingListManager {
    lists: HashMap<String, SharedShoppingList>,
    console: SharedConsole,
}

impl ShoppingListManager {
    /// Creates an empty registry; lists it creates write to `console`
    pub fn new(console: SharedConsole) -> Self {
        Self {
            lists: HashMap::new(),
            console,
        }
    }

    /// Creates an empty list and registers it under `name`
    ///
    /// Any list already registered under `name` is replaced.
    pub fn create_list(&mut self, name: impl Into<String>) -> SharedShoppingList {
        let name = name.into();
        let list = Rc::new(RefCell::new(ShoppingList::new(
            name.clone(),
            Rc::clone(&self.console),
        )));

        if self.lists.insert(name.clone(), Rc::clone(&list)).is_some() {
            debug!(list = %name, "Replaced existing shopping list");
        } else {
            debug!(list = %name, "Created shopping list");
        }
        list
    }

    /// Returns the list registered under `name`
    pub fn list(&self, name: &str) -> Option<SharedShoppingList> {
        self.lists.get(name).cloned()
    }

    /// Returns the list registered under `name` or a `ListNotFound` error
    pub fn require_list(&self, name: &str) -> Result<SharedShoppingList, ShoppingError> {
        self.list(name)
            .ok_or_else(|| ShoppingError::list_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Registered names in sorted order
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::ports::BufferConsole;

    fn manager() -> ShoppingListManager {
        ShoppingListManager::new(Rc::new(BufferConsole::new()))
    }

    #[test]
    fn test_create_and_lookup() {
        let mut manager = manager();
        let created = manager.create_list("Мій чек");

        let found = manager.list("Мій чек").unwrap();
        assert!(Rc::ptr_eq(&created, &found));
        assert_eq!(found.borrow().name(), "Мій чек");
    }

    #[test]
    fn test_duplicate_name_overwrites() {
        let mut manager = manager();
        let first = manager.create_list("dup");
        first.borrow_mut().add_item(Item::new("Молоко", 2, 25.0));
        let second = manager.create_list("dup");

        let found = manager.list("dup").unwrap();
        assert!(Rc::ptr_eq(&found, &second));
        assert!(!Rc::ptr_eq(&found, &first));
        assert!(found.borrow().is_empty());
        assert_eq!(first.borrow().len(), 1);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_require_list_reports_missing_name() {
        let manager = manager();
        let err = manager.require_list("nope").unwrap_err();
        assert!(matches!(err, ShoppingError::ListNotFound(ref name) if name == "nope"));
    }

    #[test]
    fn test_list_names_sorted() {
        let mut manager = manager();
        manager.create_list("b");
        manager.create_list("a");
        assert_eq!(manager.list_names(), vec!["a", "b"]);
        assert!(manager.contains("a"));
        assert!(!manager.is_empty());
    }
}
