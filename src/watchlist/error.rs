// Watchlist service error types

use std::fmt;

/// Errors returned by the watchlist service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchlistError {
    /// A mutating call was made with nobody logged in
    Unauthenticated,
}

impl fmt::Display for WatchlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "User not authenticated"),
        }
    }
}

impl std::error::Error for WatchlistError {}

/// Result type for watchlist service operations
pub type WatchlistResult<T> = Result<T, WatchlistError>;
