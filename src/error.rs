use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Binary serialization error: {0}")]
    BinarySerialization(#[from] bincode::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
