//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! shopping list test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built items and catalogue records from the demonstration
//! - `builders`: Builder for lists wired to a capturing console and a journal
//! - `assertions`: Assertion helpers for list invariants
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
