//! Receipts
//!
//! A [`Receipt`] is a read-only snapshot of a list: one [`ReceiptLine`] per
//! item in list order plus the grand total. The same line format is used by
//! the running listing and by the final receipt.

use std::fmt;

use serde::{Deserialize, Serialize};

use core_kernel::{format_amount, Amount, ItemId, Quantity};

use crate::item::Item;
use crate::ports::Console;

/// One priced line of a listing or receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub id: ItemId,
    pub name: String,
    pub quantity: Quantity,
    pub unit_price: Amount,
    pub line_total: Amount,
}

impl From<&Item> for ReceiptLine {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.price,
            line_total: item.line_total(),
        }
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} | Кількість: {} | Ціна за одиницю: {} | Загальна вартість: {}",
            self.id,
            self.name,
            self.quantity,
            format_amount(self.unit_price),
            format_amount(self.line_total)
        )
    }
}

/// Snapshot of a list with its grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub list_name: String,
    pub lines: Vec<ReceiptLine>,
    pub total: Amount,
}

impl Receipt {
    /// Builds a receipt over `items` in the given order
    pub fn new<'a>(list_name: impl Into<String>, items: impl IntoIterator<Item = &'a Item>) -> Self {
        let lines: Vec<ReceiptLine> = items.into_iter().map(ReceiptLine::from).collect();
        let total = lines.iter().fold(0.0, |sum, line| sum + line.line_total);

        Self {
            list_name: list_name.into(),
            lines,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes the receipt: header, item lines and total, or the empty-receipt
    /// message with no total line
    pub fn render(&self, console: &dyn Console) {
        console.blank();
        console.line(&format!("Фінальний чек для списку '{}':", self.list_name));

        if self.is_empty() {
            console.line("Чек порожній.");
            return;
        }

        for line in &self.lines {
            console.line(&line.to_string());
        }
        console.line(&format!("Загальна сума: {}", format_amount(self.total)));
    }
}
