//! Console front end for the shopping list domain
//!
//! This crate wires the domain together for the `shopping-demo` binary:
//! configuration loading, the demonstration scenario, and the error type
//! that ties their failures together.

pub mod config;
pub mod demo;
pub mod error;

pub use config::DemoConfig;
pub use demo::{run_demo, DemoOutcome};
pub use error::CliError;
