//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by operations on a single record.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A raw field value failed validation.
    #[error("invalid field value: {0}")]
    Validation(#[from] ValidationError),

    /// No phone with the requested value exists on the record.
    #[error("phone {0} is not listed for this contact")]
    PhoneNotFound(String),
}

/// Errors raised by command handlers.
///
/// Each variant corresponds to one of the fixed replies the dispatcher
/// prints; see [`CommandError::user_message`].
#[derive(Error, Debug)]
pub enum CommandError {
    /// A phone or birthday value failed validation.
    #[error("wrong field format: {0}")]
    WrongFormat(#[from] ValidationError),

    /// The named contact or phone does not exist.
    #[error("no such entry: {0}")]
    NoSuchEntry(String),

    /// The command line did not carry enough arguments.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

impl CommandError {
    /// The fixed reply printed for this kind of failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::WrongFormat(_) => "Not enough params or wrong phone format",
            Self::NoSuchEntry(_) => "There is no contact such in phone book.",
            Self::MissingArgument(_) => "Not enough params",
        }
    }
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => Self::WrongFormat(e),
            RecordError::PhoneNotFound(phone) => Self::NoSuchEntry(format!("phone {}", phone)),
        }
    }
}

/// Errors that can occur while saving or loading a snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The snapshot file could not be read
    #[error("failed to read snapshot {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The snapshot file could not be written
    #[error("failed to write snapshot {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The snapshot content is not a valid address book
    #[error("snapshot parse error: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
