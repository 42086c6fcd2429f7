//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shape of a raw birthday string: two digits, two digits, four digits,
/// dot-separated, nothing else.
static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A type-safe wrapper for birthdays.
///
/// Raw values are accepted in `DD.MM.YYYY` form and stored as a calendar
/// date, so an existing `Birthday` always names a real date; impossible
/// combinations like `31.02.2000` are rejected at construction time.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("25.12.1990").unwrap();
/// assert_eq!(birthday.to_string(), "25 December 1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the shape is wrong
    /// (digit widths, separators, stray characters) or the fields do not
    /// form a real calendar date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        match Self::parse_date(&raw) {
            Some(date) => Ok(Self(date)),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Validate a raw birthday string without constructing one.
    ///
    /// Never panics; any malformed input simply yields `false`.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse_date(raw).is_some()
    }

    /// Parse `DD.MM.YYYY` into a date, applying calendar rules.
    fn parse_date(raw: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_RE.is_match(raw) {
            return None;
        }

        let mut fields = raw.split('.');
        let day: u32 = fields.next()?.parse().ok()?;
        let month: u32 = fields.next()?.parse().ok()?;
        let year: i32 = fields.next()?.parse().ok()?;

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Get the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next occurrence of this birthday.
    ///
    /// The occurrence in `today`'s year is used when it falls on or after
    /// `today` (so the birthday itself reports 0); otherwise next year's
    /// occurrence is used. A February 29 birthday is observed on March 1
    /// in non-leap years.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        let mut next = self.occurrence_in(today.year());
        if next < today {
            next = self.occurrence_in(today.year() + 1);
        }
        (next - today).num_days()
    }

    /// The observed date of this birthday in the given year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            // Only reachable for Feb 29 against a non-leap year.
            NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
        })
    }
}

// Serde support - serialize as the canonical DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.format("%d.%m.%Y").to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - human-readable "DD MonthName YYYY" form
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d %B %Y"))
    }
}
