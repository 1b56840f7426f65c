//! Console notifier

use crate::item::Item;
use crate::observer::ShoppingListObserver;
use crate::ports::SharedConsole;
use core_kernel::format_amount;

/// Observer that reports every change as a console line
pub struct ShoppingListNotifier {
    console: SharedConsole,
}

impl ShoppingListNotifier {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl ShoppingListObserver for ShoppingListNotifier {
    fn on_item_added(&self, item: &Item) {
        self.console.line(&format!(
            "Новий товар додано: {} ({} x {})",
            item.name,
            item.quantity,
            format_amount(item.price)
        ));
    }

    fn on_item_removed(&self, item: &Item) {
        self.console.line(&format!("Товар видалено: {}", item.name));
    }
}
