use crate::catalog::Record;
use crate::store::{prepare_target, CatalogSnapshot, Store};
use crate::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the catalog as a pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Record>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved catalog");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: CatalogSnapshot = serde_json::from_str(&content)?;
        info!(
            path = %self.path.display(),
            records = snapshot.records.len(),
            saved_at = %snapshot.saved_at,
            "loaded catalog"
        );
        Ok(Some(snapshot.records))
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        prepare_target(&self.path)?;

        let content = serde_json::to_string_pretty(&CatalogSnapshot::new(records))?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), records = records.len(), "saved catalog");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
