//! Core Kernel - Foundational types for the shopping list system
//!
//! This crate provides the building blocks shared by the domain and
//! interface crates:
//! - Strongly-typed identifiers for items
//! - Amount formatting for prices and totals
//! - The common error type

pub mod amount;
pub mod identifiers;
pub mod error;

pub use amount::{format_amount, line_total, Amount, Quantity};
pub use identifiers::{ExternalItemId, ItemId};
pub use error::CoreError;
