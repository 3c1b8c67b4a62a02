//! Vita Directory - demo driver
//!
//! Builds a small directory, prints its paginated listing, and runs a few
//! lookups against the public API.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vita_directory::{AddressBook, Birthday, Config, Name, Phone, Record, SearchHit, SearchQuery};

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only, so the rendered tables own stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(page_size = config.page_size, "Configuration loaded");

    let mut book = AddressBook::new();

    let mut bill = Record::new(
        Name::new("Bill")?,
        Some(Phone::new("1234567890")?),
        None,
    );
    bill.add_phone(Phone::new("+38(098)765-43-31")?);
    book.add_record(bill);

    let birth_date =
        NaiveDate::from_ymd_opt(1991, 8, 24).ok_or_else(|| anyhow!("invalid demo date"))?;
    book.add_record(Record::new(
        Name::new("John Doe")?,
        Some(Phone::new("4567891232")?),
        Some(Birthday::new(birth_date)?),
    ));

    info!(records = book.len(), "Directory populated");

    for page in book.pages_with(config.page_size) {
        println!("{}", page);
    }

    for name in ["John Doe", "Bill"] {
        if let Some(record) = book.get(name) {
            match record.days_to_birthday() {
                Some(days) => println!("{} days until {}'s birthday", days, name),
                None => println!("No birthday on file for {}", name),
            }
        }
    }

    let query = SearchQuery::Phone(Phone::new("1234567890")?);
    if let Some(SearchHit::Name(owner)) = book.search(&query) {
        println!("1234567890 belongs to {}", owner);
    }

    Ok(())
}
