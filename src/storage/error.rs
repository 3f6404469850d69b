// Storage error types

use std::fmt;

/// Errors that can occur while talking to a storage backend
#[derive(Debug)]
pub enum StorageError {
    /// The backing store failed or rejected the operation
    Backend(String),
    /// Records could not be encoded before reaching the backend
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "storage backend failed: {}", msg),
            Self::Encode(msg) => write!(f, "record encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

/// Result type for storage backend operations
pub type StorageResult<T> = Result<T, StorageError>;
