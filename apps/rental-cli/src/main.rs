//! # Rental CLI
//!
//! Command line front end for the rental service.
//!
//! ## Usage
//! ```text
//! rental list
//! rental quote --customer <ID> --category <ID> --days 5
//! rental rent  --customer <ID> --category <ID> --days 5 [--seed 42]
//!
//! Global: --config <rental.toml>  --database <DIR>
//! ```
//!
//! Results are printed to stdout as JSON. Logs go to stderr and are filtered
//! with `RUST_LOG`.

mod commands;

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::commands::CommandLine;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = CommandLine::parse_args();
    info!(command = ?cli.command, "Starting rental CLI");

    match commands::run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Log level can be controlled via `RUST_LOG` environment variable:
/// - `RUST_LOG=debug` - Show all debug logs
/// - `RUST_LOG=rental_service=trace` - Trace logging for the service only
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rental_service=info,rental_db=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
