/// Error types for record store operations

use thiserror::Error;

/// Record store errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// No records at the location
    #[error("Location not found: {0}")]
    NotFound(String),

    /// Location already holds records (error-if-exists writes)
    #[error("Location already exists: {0}")]
    AlreadyExists(String),

    /// Location cannot be used as a key
    #[error("Invalid location: {0:?}")]
    InvalidLocation(String),

    /// Stored records are inconsistent (missing or repeated lines)
    #[error("Corrupt records at {location}: {reason}")]
    Corrupt { location: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV part file error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// RocksDB error
    #[error("RocksDB error: {0}")]
    RocksDbError(#[from] rocksdb::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Blocking task failed
    #[error("Background task failed: {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),

    /// UTF-8 conversion error
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Generic error
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

impl From<String> for StorageError {
    fn from(s: String) -> Self {
        StorageError::Other(s)
    }
}

impl From<&str> for StorageError {
    fn from(s: &str) -> Self {
        StorageError::Other(s.to_string())
    }
}
