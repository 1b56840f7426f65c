//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid item identifier: {0:?}")]
    InvalidIdentifier(String),
}

impl CoreError {
    pub fn invalid_identifier(raw: impl Into<String>) -> Self {
        CoreError::InvalidIdentifier(raw.into())
    }
}
