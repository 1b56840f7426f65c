//! Shopping List - Demonstration Binary
//!
//! Runs the fixed shopping list demonstration and prints the notifications,
//! the current listing and the final receipt to standard output. Diagnostics
//! go to standard error.
//!
//! # Usage
//!
//! ```bash
//! # Run the demonstration
//! cargo run --bin shopping-demo
//!
//! # Verbose diagnostics and a JSON event journal
//! SHOPPING_LOG_LEVEL=debug SHOPPING_PRINT_JOURNAL=true cargo run --bin shopping-demo
//! ```
//!
//! # Environment Variables
//!
//! * `SHOPPING_LIST_NAME` - Name of the demo list (default: Мій чек)
//! * `SHOPPING_REMOVE_ID` - Id of the item to remove (default: 1)
//! * `SHOPPING_PRINT_JOURNAL` - Print the event journal as JSON (default: false)
//! * `SHOPPING_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use domain_shopping::StdoutConsole;
use interface_cli::{run_demo, DemoConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let (config, config_error) = match DemoConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (DemoConfig::default(), Some(err)),
    };

    init_tracing(&config.log_level);

    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Falling back to default configuration");
    }

    let outcome = run_demo(&config, StdoutConsole::shared())?;

    if config.print_journal {
        println!("{}", outcome.journal_json()?);
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
