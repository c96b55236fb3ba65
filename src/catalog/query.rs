use crate::catalog::types::Record;

/// Text query matched against record titles and authors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    needle: String,
}

impl CatalogQuery {
    /// Normalize the raw query (trimmed, lower-cased)
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// The normalized text that is searched for
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Substring match on title or author, ignoring case.
    /// An empty needle matches every record.
    pub fn matches(&self, record: &Record) -> bool {
        record.title().to_lowercase().contains(&self.needle)
            || record.author().to_lowercase().contains(&self.needle)
    }

    /// Matching records, in the order given
    pub fn filter<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}
