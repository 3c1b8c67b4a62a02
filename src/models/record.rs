//! Record model representing one contact in the directory.

use crate::domain::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single contact: an identity name, an ordered list of phone numbers,
/// and an optional birthday.
///
/// The name is fixed at construction; it doubles as the directory key.
/// Phones keep their insertion order and may repeat — deduplication only
/// happens through explicit [`Record::remove_phone`] calls. Validity of
/// every field is guaranteed by the domain types, so no operation here
/// re-checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identity of the contact, immutable once set.
    name: Name,

    /// Phone numbers in the order they were added.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    /// Birth date, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with an optional initial phone and birthday.
    pub fn new(name: Name, phone: Option<Phone>, birthday: Option<Birthday>) -> Self {
        let mut phones = Vec::new();
        if let Some(phone) = phone {
            phones.push(phone);
        }
        Self {
            name,
            phones,
            birthday,
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the stored phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Get the phone values as plain strings, in insertion order.
    pub fn phone_values(&self) -> Vec<String> {
        self.phones.iter().map(|p| p.as_str().to_string()).collect()
    }

    /// Get the contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number to the record.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove every stored phone whose value equals `phone`.
    pub fn remove_phone(&mut self, phone: &Phone) {
        self.phones.retain(|existing| existing != phone);
    }

    /// Replace the first stored phone equal to `old_phone` with `new_phone`,
    /// keeping its position. No-op when there is no match.
    pub fn edit_phone(&mut self, old_phone: &Phone, new_phone: Phone) {
        if let Some(slot) = self.phones.iter_mut().find(|p| *p == old_phone) {
            *slot = new_phone;
        }
    }

    /// Days until the next occurrence of the contact's birthday.
    ///
    /// Returns `None` when no birthday is set. A birthday falling on today
    /// yields 0; one that already passed this year counts toward next
    /// year's occurrence.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    /// Days until the next birthday occurrence relative to `today`.
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?.date();
        let mut celebration = occurrence_in(today.year(), &birthday)?;
        if today > celebration {
            celebration = occurrence_in(today.year() + 1, &birthday)?;
        }
        Some((celebration - today).num_days())
    }
}

/// The birthday's occurrence within `year`.
///
/// Feb 29 birthdays are observed on Mar 1 in non-leap years.
fn occurrence_in(year: i32, birthday: &NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record_with_birthday(month: u32, day: u32) -> Record {
        let today = date(2026, 8, 8);
        let birthday = Birthday::new_relative_to(date(1991, month, day), today).unwrap();
        Record::new(Name::new("Bill").unwrap(), None, Some(birthday))
    }

    #[test]
    fn test_record_new_with_initial_phone() {
        let record = Record::new(
            Name::new("Bill").unwrap(),
            Some(Phone::new("1234567890").unwrap()),
            None,
        );
        assert_eq!(record.name().as_str(), "Bill");
        assert_eq!(record.phone_values(), vec!["1234567890"]);
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_without_phone() {
        let record = Record::new(Name::new("Ann").unwrap(), None, None);
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_keeps_order() {
        let mut record = Record::new(
            Name::new("Bill").unwrap(),
            Some(Phone::new("1234567890").unwrap()),
            None,
        );
        record.add_phone(Phone::new("+38(098)765-43-31").unwrap());
        assert_eq!(
            record.phone_values(),
            vec!["1234567890", "+38(098)765-43-31"]
        );
    }

    #[test]
    fn test_remove_phone_removes_every_match() {
        let mut record = Record::new(Name::new("Bill").unwrap(), None, None);
        let phone = Phone::new("1234567890").unwrap();
        record.add_phone(phone.clone());
        record.add_phone(Phone::new("4567891232").unwrap());
        record.add_phone(phone.clone());

        record.remove_phone(&phone);
        assert_eq!(record.phone_values(), vec!["4567891232"]);
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = Record::new(
            Name::new("Bill").unwrap(),
            Some(Phone::new("1234567890").unwrap()),
            None,
        );
        record.remove_phone(&Phone::new("999999999").unwrap());
        assert_eq!(record.phone_values(), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_replaces_first_match_only() {
        let mut record = Record::new(Name::new("Bill").unwrap(), None, None);
        let old = Phone::new("1234567890").unwrap();
        record.add_phone(old.clone());
        record.add_phone(Phone::new("4567891232").unwrap());
        record.add_phone(old.clone());

        record.edit_phone(&old, Phone::new("111222333").unwrap());
        assert_eq!(
            record.phone_values(),
            vec!["111222333", "4567891232", "1234567890"]
        );
    }

    #[test]
    fn test_edit_phone_absent_is_noop() {
        let mut record = Record::new(
            Name::new("Bill").unwrap(),
            Some(Phone::new("1234567890").unwrap()),
            None,
        );
        record.edit_phone(
            &Phone::new("999999999").unwrap(),
            Phone::new("111222333").unwrap(),
        );
        assert_eq!(record.phone_values(), vec!["1234567890"]);
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new(Name::new("Bill").unwrap(), None, None);
        assert_eq!(record.days_to_birthday_on(date(2026, 8, 8)), None);
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let record = record_with_birthday(8, 8);
        assert_eq!(record.days_to_birthday_on(date(2026, 8, 8)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_upcoming_this_year() {
        let record = record_with_birthday(8, 24);
        assert_eq!(record.days_to_birthday_on(date(2026, 8, 8)), Some(16));
    }

    #[test]
    fn test_days_to_birthday_passed_rolls_to_next_year() {
        let record = record_with_birthday(8, 7);
        // Aug 7 2026 has passed on Aug 8 2026; Aug 7 2027 is 364 days out.
        assert_eq!(record.days_to_birthday_on(date(2026, 8, 8)), Some(364));
    }

    #[test]
    fn test_days_to_birthday_feb_29_in_common_year() {
        let today = date(2026, 2, 20);
        let birthday = Birthday::new_relative_to(date(2000, 2, 29), today).unwrap();
        let record = Record::new(Name::new("Leap").unwrap(), None, Some(birthday));
        // 2026 is not a leap year, so the birthday is observed on Mar 1.
        assert_eq!(record.days_to_birthday_on(today), Some(9));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let today = date(2026, 8, 8);
        let mut record = Record::new(
            Name::new("Bill").unwrap(),
            Some(Phone::new("1234567890").unwrap()),
            Some(Birthday::new_relative_to(date(1991, 8, 24), today).unwrap()),
        );
        record.add_phone(Phone::new("+38(098)765-43-31").unwrap());

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
