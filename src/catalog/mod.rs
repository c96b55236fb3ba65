pub mod query;
pub mod types;

pub use query::CatalogQuery;
pub use types::{CheckoutOutcome, DeleteOutcome, Record, ReturnOutcome};

use tracing::debug;

/// In-memory owner of every record, kept in insertion order.
///
/// Keys are matched after trimming the caller's input and are compared
/// exactly. Duplicate keys are allowed; key-based operations act on the
/// first match only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the given records, order preserved
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Append a new available record and return it
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        key: impl Into<String>,
    ) -> &Record {
        let record = Record::new(title, author, key);
        debug!(key = record.key(), title = record.title(), "adding record");
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// All records in insertion order
    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    /// First record whose key equals the trimmed input
    pub fn find_by_key(&self, key: &str) -> Option<&Record> {
        self.position(key).map(|index| &self.records[index])
    }

    /// Mark the first matching record as checked out
    pub fn checkout(&mut self, key: &str) -> CheckoutOutcome {
        let Some(record) = self.find_mut(key) else {
            debug!(key, "checkout: no such record");
            return CheckoutOutcome::NotFound;
        };

        let title = record.title().to_string();
        if record.is_available() {
            record.set_available(false);
            debug!(key, "checked out");
            CheckoutOutcome::Success { title }
        } else {
            CheckoutOutcome::AlreadyCheckedOut { title }
        }
    }

    /// Mark the first matching record as available again
    pub fn return_item(&mut self, key: &str) -> ReturnOutcome {
        let Some(record) = self.find_mut(key) else {
            debug!(key, "return: no such record");
            return ReturnOutcome::NotFound;
        };

        let title = record.title().to_string();
        if record.is_checked_out() {
            record.set_available(true);
            debug!(key, "returned");
            ReturnOutcome::Success { title }
        } else {
            ReturnOutcome::AlreadyAvailable { title }
        }
    }

    /// Records whose title or author contains the query, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Record> {
        CatalogQuery::new(query).filter(&self.records)
    }

    /// Remove the first record with the key; later records shift down
    pub fn delete(&mut self, key: &str) -> DeleteOutcome {
        match self.position(key) {
            Some(index) => {
                let removed = self.records.remove(index);
                debug!(key, index, "deleted record");
                DeleteOutcome::Success {
                    title: removed.title().to_string(),
                }
            }
            None => DeleteOutcome::NotFound,
        }
    }

    /// Replace the whole collection, as done when loading saved state
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// The full ordered collection, for persistence
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        let key = key.trim();
        self.records.iter().position(|record| record.key() == key)
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Record> {
        let index = self.position(key)?;
        self.records.get_mut(index)
    }
}
