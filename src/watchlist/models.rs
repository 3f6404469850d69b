// Watchlist records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One watch-later membership record.
///
/// Exactly one entry exists per (account, movie) pair. Entries are never
/// edited in place; membership only ever flips through add and remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: String,
    pub account_id: String,
    /// Catalog id of the movie, kept as an opaque string.
    pub movie_id: String,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// What a caller supplies to put a movie on a list. The store fills in
/// the entry id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub account_id: String,
    pub movie_id: String,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
}
