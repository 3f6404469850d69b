// Top-level error types

use std::fmt;

use crate::storage::StorageError;

/// Errors raised while assembling the app core
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded or was invalid
    Config(config::ConfigError),
    /// The durable store could not be opened
    Storage(StorageError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Storage(err) => write!(f, "storage error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

/// Result type for app assembly
pub type AppResult<T> = Result<T, AppError>;
