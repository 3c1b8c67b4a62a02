//! Paginated rendering of the directory as fixed-width text tables.

use crate::book::address_book::AddressBook;
use crate::models::Record;

/// Records per page when no explicit size is given.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Total width of the rendered table, separators included.
const TABLE_WIDTH: usize = 70;

/// A cursor over the directory's insertion-order key sequence, yielding
/// one formatted page per pull.
///
/// The iterator signals exhaustion with `None`: a final partial page is a
/// normal page, and an empty directory is exhausted from the very first
/// pull rather than producing an empty page.
#[derive(Debug)]
pub struct Pages<'a> {
    book: &'a AddressBook,
    cursor: usize,
    page_size: usize,
}

impl<'a> Pages<'a> {
    /// Create a paginator over `book` with the given page size.
    pub(crate) fn new(book: &'a AddressBook, page_size: usize) -> Self {
        Self {
            book,
            cursor: 0,
            // a page size of zero would never advance the cursor
            page_size: page_size.max(1),
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let keys = self.book.keys();
        if self.cursor >= keys.len() {
            return None;
        }

        let end = usize::min(self.cursor + self.page_size, keys.len());
        let batch = &keys[self.cursor..end];
        self.cursor = end;

        let book = self.book;
        let entries = batch
            .iter()
            .filter_map(|key| book.get(key).map(|record| (key.as_str(), record)));
        Some(render_page(entries))
    }
}

/// Render one page of records as a 70-column table.
///
/// Layout per contact: the first row carries the name, the first phone,
/// and the birthday; continuation rows repeat blank name and birthday
/// columns for each further phone; a contact without phones still gets
/// one row. A separator line follows every contact block.
fn render_page<'a, I>(entries: I) -> String
where
    I: Iterator<Item = (&'a str, &'a Record)>,
{
    let separator = "-".repeat(TABLE_WIDTH);

    let mut page = String::new();
    page.push_str(&separator);
    page.push('\n');
    page.push_str(&format!(
        "|{:^33}|{:^20}|{:^13}|\n",
        "User", "Phones", "Birthday"
    ));
    page.push_str(&separator);
    page.push('\n');

    for (name, record) in entries {
        let birthday = record
            .birthday()
            .map(|b| b.to_string())
            .unwrap_or_default();

        let phones = record.phones();
        if phones.is_empty() {
            page.push_str(&format!("| {:<32}|{:>19} |{:^13}|\n", name, "", birthday));
        }
        for (index, phone) in phones.iter().enumerate() {
            if index == 0 {
                page.push_str(&format!(
                    "| {:<32}|{:>19} |{:^13}|\n",
                    name,
                    phone.as_str(),
                    birthday
                ));
            } else {
                page.push_str(&format!(
                    "|{:<33}|{:>19} |{:^13}|\n",
                    "",
                    phone.as_str(),
                    ""
                ));
            }
        }

        page.push_str(&separator);
        page.push('\n');
    }

    page
}
