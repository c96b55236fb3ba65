use crate::store::StoreFormat;
use crate::{BookshelfError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Base name of the data file, before the format extension
pub const DATA_FILE_STEM: &str = "library_data";

/// Path management for the bookshelf data file
#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    /// Directory holding the data file
    pub data_dir: PathBuf,
}

impl BookshelfPaths {
    /// Platform data directory (e.g. ~/.local/share/bookshelf)
    pub fn global() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "bookshelf").ok_or_else(|| {
            BookshelfError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Keep the data file directly in `dir`
    pub fn for_dir(dir: &Path) -> Self {
        Self {
            data_dir: dir.to_path_buf(),
        }
    }

    /// Use the current working directory
    pub fn current_dir() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Ok(Self::for_dir(&current_dir))
    }

    /// Data file for the given encoding
    pub fn data_file(&self, format: StoreFormat) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", DATA_FILE_STEM, format.extension()))
    }
}

/// Pick the data file: an explicit path wins, then the global
/// directory if requested, then the working directory.
pub fn resolve_data_file(
    explicit: Option<&Path>,
    global: bool,
    format: StoreFormat,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let paths = if global {
        BookshelfPaths::global()?
    } else {
        BookshelfPaths::current_dir()?
    };
    Ok(paths.data_file(format))
}
