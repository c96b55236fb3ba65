use serde::{Deserialize, Serialize};
use std::fmt;

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    title: String,
    author: String,
    /// Identifying code such as an ISBN; not enforced unique
    key: String,
    /// Whether the book is on the shelf (false while checked out)
    available: bool,
}

impl Record {
    /// Create a new record, available by default
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            key: key.into(),
            available: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn is_checked_out(&self) -> bool {
        !self.available
    }

    /// Only the catalog flips availability
    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available {
            "Available"
        } else {
            "Checked Out"
        };
        write!(
            f,
            "\"{}\" by {} (ISBN: {}) ({})",
            self.title, self.author, self.key, status
        )
    }
}

/// Result of checking a book out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The book was available and is now checked out
    Success { title: String },
    /// The book was already checked out; nothing changed
    AlreadyCheckedOut { title: String },
    NotFound,
}

/// Result of returning a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The book was checked out and is now available again
    Success { title: String },
    /// The book was never checked out; nothing changed
    AlreadyAvailable { title: String },
    NotFound,
}

/// Result of deleting a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The first record with the key was removed
    Success { title: String },
    NotFound,
}

impl CheckoutOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckoutOutcome::Success { .. })
    }
}

impl ReturnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReturnOutcome::Success { .. })
    }
}

impl DeleteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeleteOutcome::Success { .. })
    }
}
