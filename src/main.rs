//! Contact Book - Main entry point
//!
//! Starts an interactive session: loads configuration and the saved
//! snapshot, then hands stdin/stdout to the command loop.

use anyhow::Result;
use contact_book::repl;
use contact_book::{CommandDispatcher, Config, SnapshotStore};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/the conversation)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact book with snapshot at {}",
        config.snapshot_path.display()
    );

    // Load the persisted address book (a missing snapshot means a fresh start)
    let store = SnapshotStore::new(config.snapshot_path);
    let book = match store.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load the address book snapshot: {}", e);
            return Err(e.into());
        }
    };

    let mut dispatcher = CommandDispatcher::new(book, store);

    // Run the interactive loop (this blocks until the user exits)
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut dispatcher, stdin.lock(), stdout.lock())?;

    info!("Contact book session complete");
    Ok(())
}
