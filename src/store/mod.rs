//! Whole-collection persistence for the catalog.
//!
//! A [`Store`] reads and writes the full ordered record list in one go.
//! Two encodings exist: pretty JSON and compact bincode. Both wrap the
//! records in a [`CatalogSnapshot`] that also notes when it was written.

pub mod binary;
pub mod json;

pub use binary::BincodeFileStore;
pub use json::JsonFileStore;

use crate::catalog::Record;
use crate::{BookshelfError, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Load/save strategy for the full record collection
pub trait Store {
    /// Load the saved records.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<Record>>>;

    /// Overwrite the saved state with `records`
    fn save(&self, records: &[Record]) -> Result<()>;

    /// Where the data lives, for messages and logs
    fn location(&self) -> &Path;
}

/// On-disk envelope around the record list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// When this snapshot was written
    pub saved_at: DateTime<Utc>,
    /// Records in catalog order
    pub records: Vec<Record>,
}

impl CatalogSnapshot {
    pub fn new(records: &[Record]) -> Self {
        Self {
            saved_at: Utc::now(),
            records: records.to_vec(),
        }
    }
}

/// Encoding used for the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StoreFormat {
    #[default]
    Json,
    Binary,
}

impl StoreFormat {
    /// File extension for the default data file name
    pub fn extension(&self) -> &'static str {
        match self {
            StoreFormat::Json => "json",
            StoreFormat::Binary => "bin",
        }
    }
}

/// Build the store for `format` backed by `path`
pub fn open_store(format: StoreFormat, path: PathBuf) -> Box<dyn Store> {
    match format {
        StoreFormat::Json => Box::new(JsonFileStore::new(path)),
        StoreFormat::Binary => Box::new(BincodeFileStore::new(path)),
    }
}

/// Make sure `path` can be written as a regular file
fn prepare_target(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(BookshelfError::Store(format!(
            "{} is a directory, not a data file",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
