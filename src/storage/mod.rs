//! Persistence utilities for the contact book.
//!
//! This module reads and writes the JSON snapshot file the address book
//! survives restarts through.

pub mod snapshot;

pub use snapshot::SnapshotStore;
