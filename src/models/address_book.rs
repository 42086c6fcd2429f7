//! The address book: every record, keyed by contact name.

use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// The full collection of records, keyed by the raw name string.
///
/// Iteration follows insertion order: the map is paired with a key-order
/// list, and re-adding an existing name replaces the record while keeping
/// its place. Exactly one record exists per name, last write wins on
/// collision.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Invariant: holds exactly the keys of `records`, oldest first.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name, overwriting any existing record
    /// under that name. An overwritten name keeps its place in iteration
    /// order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Exact-key lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-key lookup with mutable access, for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record under `name`. Absence is a normal
    /// answer (`None`), not an error.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Collect records matching `query`, in two passes.
    ///
    /// Pass one takes every record with at least one phone containing
    /// `query` as a substring (once per record). Pass two appends every
    /// record whose name contains `query` case-insensitively, even when
    /// the phone pass already took it, so a record can legitimately appear
    /// twice. Each pass walks the book in insertion order.
    pub fn search_contact(&self, query: &str) -> Vec<&Record> {
        let mut matches = Vec::new();

        for record in self.iter() {
            if record.phones().iter().any(|p| p.as_str().contains(query)) {
                matches.push(record);
            }
        }

        let query_lower = query.to_lowercase();
        for record in self.iter() {
            if record.name().as_str().to_lowercase().contains(&query_lower) {
                matches.push(record);
            }
        }

        matches
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Display support - one record per line, in insertion order
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.iter().map(|record| record.to_string()).collect();
        write!(f, "{}", rendered.join("\n"))
    }
}

// Serde support - serialize as an ordered sequence of records so that
// insertion order survives the round trip
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

// Serde support - deserialize from a record sequence, re-keying by name
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
