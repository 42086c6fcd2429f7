//! Data models for the contact book.
//!
//! This module contains the data structures representing contact records and
//! the address book that collects them.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
