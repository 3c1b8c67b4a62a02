//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birth dates.
///
/// This ensures that birthdays are validated at construction time. The
/// birth year must lie 1 to 100 years in the past relative to the current
/// date; only years are compared, so a birthday later this calendar year
/// is still rejected.
///
/// `Display` renders the directory's listing format, `DD.MM.YYYYp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the age range against today.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the birth year is not
    /// 1 to 100 years in the past.
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_relative_to(date, Local::now().date_naive())
    }

    /// Create a new Birthday validated against an explicit reference date.
    ///
    /// `new` delegates here with today's date; tests inject a fixed one.
    pub fn new_relative_to(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        let age_years = today.year() - date.year();
        if !(1..=100).contains(&age_years) {
            return Err(ValidationError::InvalidBirthday(date));
        }
        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as an ISO 8601 date string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from a date with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date = NaiveDate::deserialize(deserializer)?;
        Birthday::new(date).map_err(serde::de::Error::custom)
    }
}

// Display support - listing format, e.g. "24.08.1991p"
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Yp"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let today = date(2026, 8, 8);
        let birthday = Birthday::new_relative_to(date(1991, 8, 24), today).unwrap();
        assert_eq!(birthday.date(), date(1991, 8, 24));
    }

    #[test]
    fn test_birthday_rejects_current_year() {
        let today = date(2026, 8, 8);
        assert!(Birthday::new_relative_to(date(2026, 1, 1), today).is_err());
    }

    #[test]
    fn test_birthday_rejects_future_year() {
        let today = date(2026, 8, 8);
        assert!(Birthday::new_relative_to(date(2027, 3, 15), today).is_err());
    }

    #[test]
    fn test_birthday_age_bounds() {
        let today = date(2026, 8, 8);
        // 100 years back is the oldest accepted year
        assert!(Birthday::new_relative_to(date(1926, 8, 8), today).is_ok());
        // 101 years back is out of range
        assert!(Birthday::new_relative_to(date(1925, 8, 8), today).is_err());
        // one year back is the youngest accepted year
        assert!(Birthday::new_relative_to(date(2025, 12, 31), today).is_ok());
    }

    #[test]
    fn test_birthday_display() {
        let today = date(2026, 8, 8);
        let birthday = Birthday::new_relative_to(date(1991, 8, 24), today).unwrap();
        assert_eq!(format!("{}", birthday), "24.08.1991p");
    }

    #[test]
    fn test_birthday_display_pads_day_and_month() {
        let today = date(2026, 8, 8);
        let birthday = Birthday::new_relative_to(date(2001, 1, 5), today).unwrap();
        assert_eq!(format!("{}", birthday), "05.01.2001p");
    }

    #[test]
    fn test_birthday_serialization() {
        let today = date(2026, 8, 8);
        let birthday = Birthday::new_relative_to(date(1991, 8, 24), today).unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1991-08-24\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        // A fixed mid-range year stays valid for decades of test runs.
        let birthday: Birthday = serde_json::from_str("\"1991-08-24\"").unwrap();
        assert_eq!(birthday.date(), date(1991, 8, 24));
    }

    #[test]
    fn test_birthday_deserialization_out_of_range_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1800-01-01\"");
        assert!(result.is_err());
    }
}
