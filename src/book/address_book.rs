//! AddressBook: the name-keyed collection of all records.

use crate::book::pages::{Pages, DEFAULT_PAGE_SIZE};
use crate::domain::{Name, Phone};
use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A lookup query against the directory.
///
/// The query set is closed: a directory is only ever searched by name or
/// by phone value.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Match a record by its exact name.
    Name(Name),
    /// Match a record owning this exact phone value.
    Phone(Phone),
}

/// A successful search result.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit {
    /// Phone values of the record whose name matched, in stored order.
    Phones(Vec<String>),
    /// Name of the record owning the matched phone.
    Name(String),
}

/// The contact directory: maps names to records, preserving insertion
/// order.
///
/// Insertion order drives both the pagination layout and the "last match
/// wins" rule when the same phone value appears in several records, so it
/// must be stable: overwriting an existing name keeps the record's
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the directory.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert a record keyed by its name.
    ///
    /// An existing record under the same name is replaced wholesale
    /// (last-write-wins, no merge) and keeps its insertion position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        tracing::debug!(name = %key, "adding record");
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Get the record stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Remove and return the record stored under `name`.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            self.order.retain(|key| key != name);
        }
        removed
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.order.iter().filter_map(|key| {
            self.records
                .get(key)
                .map(|record| (key.as_str(), record))
        })
    }

    /// Search the directory by name or by phone value.
    ///
    /// A name query matches on exact key equality and yields the record's
    /// phone values; a phone query scans every record's phone list and
    /// yields the owning record's name. Both scans walk the whole
    /// directory without short-circuiting, so with duplicate phone values
    /// the last record in insertion order wins.
    pub fn search(&self, query: &SearchQuery) -> Option<SearchHit> {
        let mut hit = None;

        match query {
            SearchQuery::Name(name) => {
                for (key, record) in self.iter() {
                    if name.as_str() == key {
                        hit = Some(SearchHit::Phones(record.phone_values()));
                    }
                }
            }
            SearchQuery::Phone(phone) => {
                for (key, record) in self.iter() {
                    for stored in record.phones() {
                        if stored == phone {
                            hit = Some(SearchHit::Name(key.to_string()));
                        }
                    }
                }
            }
        }

        tracing::debug!(found = hit.is_some(), "search finished");
        hit
    }

    /// Paginate the directory with the default page size of 10.
    pub fn pages(&self) -> Pages<'_> {
        self.pages_with(DEFAULT_PAGE_SIZE)
    }

    /// Paginate the directory with an explicit page size.
    pub fn pages_with(&self, page_size: usize) -> Pages<'_> {
        Pages::new(self, page_size)
    }

    pub(crate) fn keys(&self) -> &[String] {
        &self.order
    }
}

// Serde support - serialize as the record sequence in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter().map(|(_, record)| record))
    }
}

// Serde support - rebuild from a record sequence, revalidating each entry
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
