//! Shopping List Domain
//!
//! This crate models an in-memory shopping list: items are added and removed
//! by id, registered observers are notified synchronously on every change, and
//! the list can print a running listing and a final receipt.
//!
//! # Ownership Model
//!
//! Everything is single-threaded. Lists handed out by the
//! [`ShoppingListManager`] are shared through `Rc<RefCell<_>>` handles, and
//! observers are registered as `Rc<dyn ShoppingListObserver>` so a list never
//! controls an observer's lifetime. All console text goes through the
//! [`Console`] port.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use domain_shopping::{BufferConsole, Item, ShoppingListManager, ShoppingListNotifier};
//!
//! let console = Rc::new(BufferConsole::new());
//! let mut manager = ShoppingListManager::new(console.clone());
//!
//! let list = manager.create_list("Weekly");
//! list.borrow_mut()
//!     .add_observer(Rc::new(ShoppingListNotifier::new(console.clone())));
//!
//! let id = list.borrow_mut().add_item(Item::new("Milk", 2, 25.0));
//! assert_eq!(id.value(), 1);
//! assert_eq!(list.borrow().total(), 50.0);
//! assert_eq!(console.lines(), vec!["Новий товар додано: Milk (2 x 25.0)"]);
//! ```

pub mod item;
pub mod adapters;
pub mod ports;
pub mod observer;
pub mod notifier;
pub mod events;
pub mod receipt;
pub mod list;
pub mod manager;
pub mod error;

pub use item::Item;
pub use adapters::{ExternalItem, ItemAdapter};
pub use ports::{BufferConsole, Console, SharedConsole, StdoutConsole};
pub use observer::{SharedObserver, ShoppingListObserver};
pub use notifier::ShoppingListNotifier;
pub use events::{EventJournal, ShoppingListEvent};
pub use receipt::{Receipt, ReceiptLine};
pub use list::ShoppingList;
pub use manager::{SharedShoppingList, ShoppingListManager};
pub use error::ShoppingError;
