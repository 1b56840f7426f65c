//! Shopping domain errors
//!
//! Removing an unknown item is deliberately absent here: it is reported to
//! the user through the console and is not an error.

use thiserror::Error;

/// Errors that can occur in the shopping domain
#[derive(Debug, Error)]
pub enum ShoppingError {
    /// No list is registered under the given name
    #[error("Shopping list not found: {0}")]
    ListNotFound(String),

    /// An external catalogue feed could not be decoded
    #[error("Malformed external item feed: {0}")]
    MalformedFeed(#[from] serde_json::Error),
}

impl ShoppingError {
    /// Creates a ListNotFound error for the given list name
    pub fn list_not_found(name: impl Into<String>) -> Self {
        ShoppingError::ListNotFound(name.into())
    }
}
