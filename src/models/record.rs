//! Record model representing one contact in the book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction time and doubles as the address-book
/// key. Phones keep insertion order and may repeat; no dedup is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Immutable identity of the contact
    name: Name,

    /// Phone numbers, in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    /// Birthday, if one has been recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when `raw` is not a
    /// 10-digit numeral; the record is left unchanged.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove and return the first phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` when no phone matches.
    pub fn remove_phone(&mut self, raw: &str) -> RecordResult<Phone> {
        let position = self.position_of(raw)?;
        Ok(self.phones.remove(position))
    }

    /// Replace the first phone equal to `old` with a validated `new` value.
    ///
    /// The whole phone list is scanned; only when no entry matches anywhere
    /// does the edit fail.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` when `old` is not listed, or
    /// `RecordError::Validation` when `new` is not a valid phone (the old
    /// value is kept in that case).
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let position = self.position_of(old)?;
        self.phones[position] = Phone::new(new)?;
        Ok(())
    }

    /// The first phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Set or replace the birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when `raw` is malformed
    /// or names an impossible date; an existing birthday is kept.
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Days from `today` until the contact's next birthday.
    ///
    /// Returns `None` when no birthday is recorded; that is a normal
    /// answer, not an error. See [`Birthday::days_until`] for the
    /// countdown rules, including the Feb 29 policy.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }

    fn position_of(&self, raw: &str) -> RecordResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == raw)
            .ok_or_else(|| RecordError::PhoneNotFound(raw.to_string()))
    }
}

// Display support - the canonical one-line rendering of a contact
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Name: {}, phones: {}", self.name, phones.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    #[test]
    fn test_record_new_is_empty() {
        let rec = record("Alice");
        assert_eq!(rec.name().as_str(), "Alice");
        assert!(rec.phones().is_empty());
        assert!(rec.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("2222222222").unwrap();
        rec.add_phone("1111111111").unwrap();

        let phones: Vec<&str> = rec.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut rec = record("Alice");
        assert!(rec.add_phone("123").is_err());
        assert!(rec.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_takes_first_match() {
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("2222222222").unwrap();
        rec.add_phone("1111111111").unwrap();

        let removed = rec.remove_phone("1111111111").unwrap();
        assert_eq!(removed.as_str(), "1111111111");

        let phones: Vec<&str> = rec.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_phone_missing_fails() {
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();

        let err = rec.remove_phone("9999999999").unwrap_err();
        assert!(matches!(err, RecordError::PhoneNotFound(_)));
    }

    #[test]
    fn test_edit_phone_scans_whole_list() {
        // The match may sit anywhere in the list, not just at the front.
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("2222222222").unwrap();
        rec.add_phone("3333333333").unwrap();

        rec.edit_phone("3333333333", "4444444444").unwrap();

        let phones: Vec<&str> = rec.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "4444444444"]);
    }

    #[test]
    fn test_edit_phone_replaces_first_match_only() {
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("1111111111").unwrap();

        rec.edit_phone("1111111111", "2222222222").unwrap();

        let phones: Vec<&str> = rec.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_missing_fails() {
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();

        let err = rec.edit_phone("9999999999", "2222222222").unwrap_err();
        assert!(matches!(err, RecordError::PhoneNotFound(_)));
    }

    #[test]
    fn test_edit_phone_validates_replacement() {
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();

        let err = rec.edit_phone("1111111111", "bad").unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
        // The old value stays put.
        assert_eq!(rec.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_find_phone() {
        let mut rec = record("Alice");
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("2222222222").unwrap();

        assert_eq!(rec.find_phone("2222222222").unwrap().as_str(), "2222222222");
        assert!(rec.find_phone("9999999999").is_none());
    }

    #[test]
    fn test_set_birthday_and_replace() {
        let mut rec = record("Alice");
        rec.set_birthday("25.12.1990").unwrap();
        assert_eq!(rec.birthday().unwrap().to_string(), "25 December 1990");

        rec.set_birthday("01.01.1991").unwrap();
        assert_eq!(rec.birthday().unwrap().to_string(), "01 January 1991");
    }

    #[test]
    fn test_set_birthday_invalid_keeps_old_value() {
        let mut rec = record("Alice");
        rec.set_birthday("25.12.1990").unwrap();
        assert!(rec.set_birthday("31.02.2000").is_err());
        assert_eq!(rec.birthday().unwrap().to_string(), "25 December 1990");
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let rec = record("Alice");
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(rec.days_to_birthday(today), None);
    }

    #[test]
    fn test_days_to_birthday_on_the_day() {
        let mut rec = record("Alice");
        rec.set_birthday("25.12.1990").unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert_eq!(rec.days_to_birthday(today), Some(0));
    }

    #[test]
    fn test_record_display() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("0987654321").unwrap();

        assert_eq!(
            rec.to_string(),
            "Name: Alice, phones: 1234567890, 0987654321"
        );
    }

    #[test]
    fn test_record_display_without_phones() {
        let rec = record("Alice");
        assert_eq!(rec.to_string(), "Name: Alice, phones: ");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.set_birthday("25.12.1990").unwrap();

        let json = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_record_serialization_skips_empty_fields() {
        let rec = record("Alice");
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, "{\"name\":\"Alice\"}");
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let json = r#"{"name":"Alice","phones":["not-a-phone"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
