//! Demo configuration
//!
//! Settings come from `SHOPPING_`-prefixed environment variables (a `.env`
//! file is honoured by the binary). With nothing set, the defaults reproduce
//! the fixed demonstration exactly.

use serde::Deserialize;
use tracing::warn;

use core_kernel::{CoreError, ItemId};

/// Name of the list the demonstration creates by default
pub const DEFAULT_LIST_NAME: &str = "Мій чек";

/// Demonstration configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoConfig {
    /// Name the demo list is registered under
    pub list_name: String,
    /// Log filter directive
    pub log_level: String,
    /// Id of the item the demo removes
    pub remove_id: String,
    /// Print the event journal as JSON after the receipt
    pub print_journal: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            list_name: DEFAULT_LIST_NAME.to_string(),
            log_level: "info".to_string(),
            remove_id: "1".to_string(),
            print_journal: false,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        let defaults = Self::default();

        ::config::Config::builder()
            .set_default("list_name", defaults.list_name)?
            .set_default("log_level", defaults.log_level)?
            .set_default("remove_id", defaults.remove_id)?
            .set_default("print_journal", defaults.print_journal)?
            .add_source(::config::Environment::with_prefix("SHOPPING"))
            .build()?
            .try_deserialize()
    }

    /// Parses the configured removal id
    pub fn remove_item_id(&self) -> Result<ItemId, CoreError> {
        self.remove_id.parse()
    }

    /// Configured removal id, or [`ItemId::FIRST`] when it does not parse
    pub fn remove_item_id_or_first(&self) -> ItemId {
        self.remove_item_id().unwrap_or_else(|err| {
            warn!(error = %err, "Falling back to removing the first item");
            ItemId::FIRST
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demonstration() {
        let config = DemoConfig::default();
        assert_eq!(config.list_name, "Мій чек");
        assert_eq!(config.remove_item_id().unwrap(), ItemId::FIRST);
        assert!(!config.print_journal);
    }

    #[test]
    fn test_invalid_remove_id() {
        let config = DemoConfig {
            remove_id: "first".to_string(),
            ..DemoConfig::default()
        };
        assert!(matches!(
            config.remove_item_id(),
            Err(CoreError::InvalidIdentifier(_))
        ));
        assert_eq!(config.remove_item_id_or_first(), ItemId::FIRST);
    }

    #[test]
    fn test_valid_remove_id_is_kept() {
        let config = DemoConfig {
            remove_id: "3".to_string(),
            ..DemoConfig::default()
        };
        assert_eq!(config.remove_item_id_or_first(), ItemId::new(3));
    }
}
