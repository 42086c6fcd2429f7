//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present; loading it never prints
//! to stdout, which the interactive session uses for conversation.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// File the address book is persisted to when no override is given.
pub const DEFAULT_SNAPSHOT_FILE: &str = "address_book.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON snapshot file (default: `address_book.json`)
    pub snapshot_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Where to read and write the snapshot file
    ///   (default: `address_book.json` in the working directory)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let snapshot_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "CONTACT_BOOK_PATH".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_SNAPSHOT_FILE),
        };

        Ok(Config { snapshot_path })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
        }
    }
}
