//! The demonstration scenario
//!
//! Creates a list, attaches a console notifier and an event journal, adds two
//! items directly and one adapted from an external catalogue record, removes
//! one item, then prints the listing and the final receipt.

use std::rc::Rc;

use tracing::info;

use domain_shopping::{
    EventJournal, ExternalItem, Item, ItemAdapter, Receipt, SharedConsole,
    ShoppingListEvent, ShoppingListManager, ShoppingListNotifier,
};

use crate::config::DemoConfig;
use crate::error::CliError;

/// Catalogue records the demonstration imports, in the catalogue's own schema
pub const CATALOGUE_FEED: &str =
    r#"[{"externalId": "ext123", "productName": "Яблука", "count": 5, "unitPrice": 12.0}]"#;

/// What the demonstration left behind
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    /// Receipt of the demo list after all operations
    pub receipt: Receipt,
    /// Every change the list reported, in order
    pub journal: Vec<ShoppingListEvent>,
}

impl DemoOutcome {
    /// Renders the journal as pretty-printed JSON
    pub fn journal_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&self.journal)?)
    }
}

/// Runs the demonstration, writing all user-visible text to `console`
///
/// # Errors
///
/// Returns `CliError::Shopping` if the catalogue feed cannot be decoded. A
/// removal id that is not a number falls back to the first item.
pub fn run_demo(config: &DemoConfig, console: SharedConsole) -> Result<DemoOutcome, CliError> {
    let remove_id = config.remove_item_id_or_first();

    let catalogue = ExternalItem::parse_feed(CATALOGUE_FEED)?;

    let mut manager = ShoppingListManager::new(Rc::clone(&console));
    let list = manager.create_list(config.list_name.as_str());

    let journal = Rc::new(EventJournal::new());
    {
        let mut list = list.borrow_mut();
        list.add_observer(Rc::new(ShoppingListNotifier::new(Rc::clone(&console))));
        list.add_observer(journal.clone());
    }

    info!(list = %config.list_name, "Running shopping list demonstration");

    console.line("Додаємо товари...");
    list.borrow_mut().add_item(Item::new("Молоко", 2, 25.0));
    list.borrow_mut().add_item(Item::new("Хліб", 1, 15.0));

    for external in catalogue {
        let next_id = list.borrow().next_id();
        let adapted = ItemAdapter::new(external).to_item(next_id);
        list.borrow_mut().add_item(adapted);
    }

    console.blank();
    console.line(&format!("Видаляємо товар ID {remove_id}..."));
    list.borrow_mut().remove_item(remove_id);

    console.blank();
    console.line("Поточний список:");
    list.borrow().display_items();

    console.blank();
    console.line("Друкуємо фінальний чек:");
    list.borrow().print_receipt();

    let receipt = list.borrow().receipt();
    info!(
        list = %config.list_name,
        items = receipt.lines.len(),
        total = receipt.total,
        "Demonstration finished"
    );

    Ok(DemoOutcome {
        receipt,
        journal: journal.events(),
    })
}
