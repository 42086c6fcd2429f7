//! JSON snapshot persistence for the address book.
//!
//! The whole book is written as one JSON document and read back on startup.
//! A missing snapshot file is a normal first run, not an error.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads and writes the address book snapshot at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store bound to the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the snapshot is read from and written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the address book from the snapshot file.
    ///
    /// Returns an empty book when the file does not exist yet. Any other
    /// I/O failure, and any snapshot that does not parse as a valid record
    /// sequence, is an error.
    pub fn load(&self) -> StorageResult<AddressBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    "No snapshot at {}, starting with an empty address book",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(source) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let book: AddressBook = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} record(s) from snapshot {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    /// Write the address book to the snapshot file, replacing any previous
    /// contents.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, json).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            "Saved {} record(s) to snapshot {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Name;
    use crate::models::Record;
    use tempfile::tempdir;

    fn sample_book() -> AddressBook {
        let mut record = Record::new(Name::new("Alice").unwrap());
        record.add_phone("1234567890").unwrap();
        record.set_birthday("15.06.1990").unwrap();

        let mut book = AddressBook::new();
        book.add_record(record);
        book
    }

    #[test]
    fn test_load_missing_file_yields_empty_book() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("absent.json"));

        let book = store.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("book.json"));

        let book = sample_book();
        store.save(&book).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        let record = loaded.find("Alice").unwrap();
        assert_eq!(record.phones()[0].as_str(), "1234567890");
        assert_eq!(record.birthday().unwrap().to_string(), "15 June 1990");
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("book.json"));

        store.save(&sample_book()).unwrap();
        store.save(&AddressBook::new()).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SnapshotStore::new(path);
        let result = store.load();
        assert!(matches!(result, Err(StorageError::Malformed(_))));
    }

    #[test]
    fn test_load_rejects_invalid_record_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"[{"name":"Alice","phones":["too-short"]}]"#).unwrap();

        let store = SnapshotStore::new(path);
        assert!(store.load().is_err());
    }
}
