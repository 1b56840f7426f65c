//! Strongly-typed identifiers for shopping list entities
//!
//! Newtype wrappers keep internal item ids and foreign catalogue ids apart:
//! an [`ExternalItemId`] is opaque and is never translated into an [`ItemId`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Identifier of an item within one shopping list
///
/// Ids are issued by the owning list from a counter starting at [`ItemId::FIRST`].
/// They are only unique within that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Id carried by items that have not been inserted into a list yet
    pub const PLACEHOLDER: ItemId = ItemId(0);

    /// First id a list hands out
    pub const FIRST: ItemId = ItemId(1);

    /// Creates an identifier from its numeric value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns true for the pre-insertion placeholder
    pub fn is_placeholder(&self) -> bool {
        *self == Self::PLACEHOLDER
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::invalid_identifier(s))
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(id: ItemId) -> u64 {
        id.0
    }
}

/// Identifier assigned to a product by an external catalogue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalItemId(String);

impl ExternalItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExternalItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ExternalItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display_is_bare_number() {
        assert_eq!(ItemId::new(42).to_string(), "42");
    }

    #[test]
    fn test_item_id_next_increments() {
        assert_eq!(ItemId::FIRST.next(), ItemId::new(2));
        assert_eq!(ItemId::PLACEHOLDER.next(), ItemId::FIRST);
    }

    #[test]
    fn test_item_id_parsing_trims_whitespace() {
        let parsed: ItemId = " 7 ".parse().unwrap();
        assert_eq!(parsed, ItemId::new(7));
    }

    #[test]
    fn test_item_id_parsing_rejects_garbage() {
        let err = "seven".parse::<ItemId>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentifier(ref raw) if raw == "seven"));
    }

    #[test]
    fn test_external_id_is_kept_verbatim() {
        let id = ExternalItemId::from("ext123");
        assert_eq!(id.as_str(), "ext123");
        assert_eq!(id.to_string(), "ext123");
    }
}
