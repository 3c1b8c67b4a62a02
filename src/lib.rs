//! Vita Directory - the in-memory contact directory of the Vita personal assistant.
//!
//! This library stores named contact records with validated phone numbers
//! and an optional birthday, answers lookups by name or phone value, and
//! renders paginated fixed-width listings.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phones, birthdays)
//! - **models**: The contact record and its phone/birthday operations
//! - **book**: The directory itself — ordered storage, search, pagination
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use vita_directory::{AddressBook, Name, Phone, Record, SearchQuery};
//!
//! let mut book = AddressBook::new();
//! let mut record = Record::new(Name::new("Bill").unwrap(), None, None);
//! record.add_phone(Phone::new("1234567890").unwrap());
//! book.add_record(record);
//!
//! let query = SearchQuery::Phone(Phone::new("1234567890").unwrap());
//! assert!(book.search(&query).is_some());
//! ```

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Pages, SearchHit, SearchQuery, DEFAULT_PAGE_SIZE};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, ConfigResult};
pub use models::Record;
