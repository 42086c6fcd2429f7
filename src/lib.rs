//! Contact Book - an interactive, line-oriented contact manager.
//!
//! This library implements a local contact book: self-validating typed
//! fields, records holding phones and an optional birthday, an
//! insertion-ordered address book with substring search, a command
//! dispatcher, and JSON snapshot persistence between sessions.
//!
//! # Architecture
//!
//! - **domain**: Self-validating value objects (Name, Phone, Birthday)
//! - **models**: Record and the AddressBook collection
//! - **commands**: Input-line parsing and the command dispatcher
//! - **storage**: Snapshot persistence for the address book
//! - **repl**: The interactive command loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use commands::{CommandDispatcher, HELP_TEXT};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::{AddressBook, Record};
pub use storage::SnapshotStore;
