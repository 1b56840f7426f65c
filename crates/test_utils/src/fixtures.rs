//! Pre-built Test Fixtures
//!
//! Items and catalogue records used by the demonstration, so tests can
//! replay it piece by piece.

use core_kernel::Amount;
use domain_shopping::{ExternalItem, Item};

/// Fixture for shopping list items
pub struct ItemFixtures;

impl ItemFixtures {
    /// Two units of milk at 25.0
    pub fn milk() -> Item {
        Item::new("Молоко", 2, 25.0)
    }

    /// One loaf of bread at 15.0
    pub fn bread() -> Item {
        Item::new("Хліб", 1, 15.0)
    }

    /// A return entry with a negative quantity
    pub fn refund() -> Item {
        Item::new("Повернення", -1, 15.0)
    }

    /// Catalogue record for five apples at 12.0
    pub fn external_apples() -> ExternalItem {
        ExternalItem::new("ext123", "Яблука", 5, 12.0)
    }

    /// Grand total of the demonstration after milk is removed
    pub fn demo_total() -> Amount {
        75.0
    }
}

/// Expected console transcript of the demonstration with default settings
pub fn demo_transcript() -> Vec<&'static str> {
    vec![
        "Додаємо товари...",
        "Новий товар додано: Молоко (2 x 25.0)",
        "Новий товар додано: Хліб (1 x 15.0)",
        "Новий товар додано: Яблука (5 x 12.0)",
        "",
        "Видаляємо товар ID 1...",
        "Товар видалено: Молоко",
        "",
        "Поточний список:",
        "",
        "Список покупок 'Мій чек':",
        "2. Хліб | Кількість: 1 | Ціна за одиницю: 15.0 | Загальна вартість: 15.0",
        "3. Яблука | Кількість: 5 | Ціна за одиницю: 12.0 | Загальна вартість: 60.0",
        "",
        "Друкуємо фінальний чек:",
        "",
        "Фінальний чек для списку 'Мій чек':",
        "2. Хліб | Кількість: 1 | Ціна за одиницю: 15.0 | Загальна вартість: 15.0",
        "3. Яблука | Кількість: 5 | Ціна за одиницю: 12.0 | Загальна вартість: 60.0",
        "Загальна сума: 75.0",
    ]
}
