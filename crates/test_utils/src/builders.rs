//! Test Data Builders
//!
//! [`TestListBuilder`] assembles a [`ShoppingList`] wired to a
//! [`BufferConsole`] and an [`EventJournal`], so a test can inspect both the
//! printed output and the notifications.

use std::rc::Rc;

use domain_shopping::{BufferConsole, EventJournal, Item, ShoppingList, ShoppingListNotifier};

/// A list together with the probes attached to it
pub struct TestList {
    pub list: ShoppingList,
    pub console: Rc<BufferConsole>,
    pub journal: Rc<EventJournal>,
}

/// Builder for lists under test
pub struct TestListBuilder {
    name: String,
    items: Vec<Item>,
    with_notifier: bool,
}

impl Default for TestListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestListBuilder {
    /// Creates a builder for an empty list named "Тест"
    pub fn new() -> Self {
        Self {
            name: "Тест".to_string(),
            items: Vec::new(),
            with_notifier: false,
        }
    }

    /// Sets the list name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an item once the list is built, after observers are attached
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Attaches a console notifier ahead of the journal
    pub fn with_notifier(mut self) -> Self {
        self.with_notifier = true;
        self
    }

    /// Builds the list and replays the configured items into it
    pub fn build(self) -> TestList {
        let console = Rc::new(BufferConsole::new());
        let journal = Rc::new(EventJournal::new());
        let mut list = ShoppingList::new(self.name, console.clone());

        if self.with_notifier {
            list.add_observer(Rc::new(ShoppingListNotifier::new(console.clone())));
        }
        list.add_observer(journal.clone());

        for item in self.items {
            list.add_item(item);
        }

        TestList {
            list,
            console,
            journal,
        }
    }
}
