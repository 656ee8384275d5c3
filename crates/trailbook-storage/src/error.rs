//! Storage error types

use thiserror::Error;

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Lock error: {0}")]
    Lock(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<StorageError> for trailbook_core::Error {
    fn from(e: StorageError) -> Self {
        trailbook_core::Error::Storage(e.to_string())
    }
}
