//! Front end errors

use thiserror::Error;

use domain_shopping::ShoppingError;

/// Errors surfaced by the demonstration binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Shopping error: {0}")]
    Shopping(#[from] ShoppingError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
