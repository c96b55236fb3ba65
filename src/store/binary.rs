use crate::catalog::Record;
use crate::store::{prepare_target, CatalogSnapshot, Store};
use crate::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the catalog as a compact bincode blob
#[derive(Debug, Clone)]
pub struct BincodeFileStore {
    path: PathBuf,
}

impl BincodeFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Store for BincodeFileStore {
    fn load(&self) -> Result<Option<Vec<Record>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved catalog");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: CatalogSnapshot = bincode::deserialize_from(BufReader::new(file))?;
        info!(
            path = %self.path.display(),
            records = snapshot.records.len(),
            "loaded catalog"
        );
        Ok(Some(snapshot.records))
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        prepare_target(&self.path)?;

        let mut writer = BufWriter::new(File::create(&self.path)?);
        bincode::serialize_into(&mut writer, &CatalogSnapshot::new(records))?;
        writer.flush()?;
        info!(path = %self.path.display(), records = records.len(), "saved catalog");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookshelfError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (BincodeFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = BincodeFileStore::new(temp_dir.path().join("library_data.bin"));
        (store, temp_dir)
    }

    #[test]
    fn test_load_missing_file() {
        let (store, _temp_dir) = create_test_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_and_load_checked_out_state() {
        let (store, _temp_dir) = create_test_store();
        let mut dune = Record::new("Dune", "Frank Herbert", "111");
        dune.set_available(false);
        let records = vec![dune, Record::new("Foundation", "Isaac Asimov", "222")];

        store.save(&records).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, records);
        assert!(loaded[0].is_checked_out());
    }

    #[test]
    fn test_load_truncated_file() {
        let (store, _temp_dir) = create_test_store();
        fs::write(store.location(), [0u8, 1, 2]).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, BookshelfError::BinarySerialization(_)));
    }
}
