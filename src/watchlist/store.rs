// Account-scoped watchlist CRUD

use chrono::Utc;

use crate::ids;
use crate::storage::TableStore;

use super::models::{NewEntry, WatchlistEntry};

/// Table holding every account's watchlist entries together.
pub const WATCHLIST_TABLE: &str = "watchlist";

/// Keyed CRUD over the persisted watchlist table.
///
/// All accounts share one table and every operation filters by account id,
/// so there is no way to reach an entry without naming its owner. The
/// store trusts the account ids it is given; authorization happens in
/// [`WatchlistService`](super::WatchlistService), not here.
pub struct WatchlistStore {
    tables: TableStore,
}

impl WatchlistStore {
    pub fn new(tables: TableStore) -> Self {
        Self { tables }
    }

    /// Adds a movie to an account's list and returns the stored entry.
    ///
    /// Adding a movie that is already on the list is a no-op that hands
    /// back the existing entry, original timestamp and all.
    pub fn add(&self, new: NewEntry) -> WatchlistEntry {
        let mut entries: Vec<WatchlistEntry> = self.tables.read(WATCHLIST_TABLE);
        if let Some(existing) = entries
            .iter()
            .find(|entry| entry.account_id == new.account_id && entry.movie_id == new.movie_id)
        {
            return existing.clone();
        }

        let entry = WatchlistEntry {
            id: ids::generate(),
            account_id: new.account_id,
            movie_id: new.movie_id,
            title: new.title,
            poster_path: new.poster_path,
            release_date: new.release_date,
            created_at: Utc::now(),
        };
        entries.push(entry.clone());
        self.tables.write(WATCHLIST_TABLE, &entries);
        entry
    }

    /// Removes the (account, movie) entry. Absence is a silent no-op.
    pub fn remove(&self, account_id: &str, movie_id: &str) {
        let mut entries: Vec<WatchlistEntry> = self.tables.read(WATCHLIST_TABLE);
        let before = entries.len();
        entries.retain(|entry| !(entry.account_id == account_id && entry.movie_id == movie_id));
        if entries.len() != before {
            self.tables.write(WATCHLIST_TABLE, &entries);
        }
    }

    /// Entries belonging to `account_id`, most recently added first.
    ///
    /// The sort is stable, so entries sharing a timestamp keep their table
    /// order and repeated reads agree.
    pub fn list(&self, account_id: &str) -> Vec<WatchlistEntry> {
        let mut entries: Vec<WatchlistEntry> = self
            .tables
            .read::<WatchlistEntry>(WATCHLIST_TABLE)
            .into_iter()
            .filter(|entry| entry.account_id == account_id)
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }

    /// Whether `movie_id` is on the account's list.
    pub fn contains(&self, account_id: &str, movie_id: &str) -> bool {
        self.tables
            .read::<WatchlistEntry>(WATCHLIST_TABLE)
            .iter()
            .any(|entry| entry.account_id == account_id && entry.movie_id == movie_id)
    }
}
