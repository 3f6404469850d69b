// Catalog error types

use std::fmt;

/// Errors surfaced by catalog lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog could not be reached or answered outside 2xx
    Unavailable(String),
    /// No movie exists under the requested id
    NotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "catalog unavailable: {}", msg),
            Self::NotFound(movie_id) => write!(f, "no movie found for id {}", movie_id),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

/// Result type for catalog lookups
pub type CatalogResult<T> = Result<T, CatalogError>;
