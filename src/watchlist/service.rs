// Session-gated watchlist operations

use std::sync::Arc;

use crate::auth::SessionStore;
use crate::catalog::Movie;

use super::error::{WatchlistError, WatchlistResult};
use super::models::{NewEntry, WatchlistEntry};
use super::store::WatchlistStore;

/// Authorization gate in front of [`WatchlistStore`].
///
/// Each call resolves the logged-in identity from the session store
/// exactly once and scopes the underlying operation to it. Reads degrade
/// when nobody is logged in (empty list, `false`); writes refuse with
/// [`WatchlistError::Unauthenticated`]. This is the only place watchlist
/// authorization happens.
pub struct WatchlistService {
    sessions: Arc<SessionStore>,
    store: WatchlistStore,
}

impl WatchlistService {
    pub fn new(sessions: Arc<SessionStore>, store: WatchlistStore) -> Self {
        Self { sessions, store }
    }

    /// Puts `movie` on the logged-in account's list.
    ///
    /// Idempotent per movie: re-adding hands back the existing entry.
    pub fn add(&self, movie: &Movie) -> WatchlistResult<WatchlistEntry> {
        let user = self
            .sessions
            .current_user()
            .ok_or(WatchlistError::Unauthenticated)?;
        Ok(self.store.add(NewEntry {
            account_id: user.id,
            movie_id: movie.id.to_string(),
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
        }))
    }

    /// Takes the movie off the logged-in account's list; absence is fine.
    pub fn remove(&self, movie_id: u64) -> WatchlistResult<()> {
        let user = self
            .sessions
            .current_user()
            .ok_or(WatchlistError::Unauthenticated)?;
        self.store.remove(&user.id, &movie_id.to_string());
        Ok(())
    }

    /// The logged-in account's entries, newest first. Empty when nobody
    /// is logged in.
    pub fn list(&self) -> Vec<WatchlistEntry> {
        match self.sessions.current_user() {
            Some(user) => self.store.list(&user.id),
            None => Vec::new(),
        }
    }

    /// Whether the movie is on the logged-in account's list. `false` when
    /// nobody is logged in.
    pub fn contains(&self, movie_id: u64) -> bool {
        match self.sessions.current_user() {
            Some(user) => self.store.contains(&user.id, &movie_id.to_string()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Movie;
    use crate::storage::{MemoryBackend, TableStore};

    use super::*;

    fn sample_movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: Some(format!("/poster-{}.jpg", id)),
            backdrop_path: None,
            overview: String::new(),
            release_date: Some("1999-03-31".to_string()),
            vote_average: 8.7,
        }
    }

    fn test_service() -> (WatchlistService, Arc<SessionStore>) {
        let tables = TableStore::new(Arc::new(MemoryBackend::new()));
        let sessions = Arc::new(SessionStore::new(tables.clone()));
        let service = WatchlistService::new(sessions.clone(), WatchlistStore::new(tables));
        (service, sessions)
    }

    #[test]
    fn test_writes_require_a_session() {
        let (service, _) = test_service();
        let movie = sample_movie(603, "The Matrix");

        assert_eq!(
            service.add(&movie).unwrap_err(),
            WatchlistError::Unauthenticated
        );
        assert_eq!(
            service.remove(603).unwrap_err(),
            WatchlistError::Unauthenticated
        );
    }

    #[test]
    fn test_reads_degrade_without_a_session() {
        let (service, _) = test_service();
        assert!(service.list().is_empty());
        assert!(!service.contains(603));
    }

    #[test]
    fn test_operations_scope_to_the_logged_in_account() {
        let (service, sessions) = test_service();
        let movie = sample_movie(603, "The Matrix");

        sessions.register("ripley@weyland.com", "nostromo").unwrap();
        let entry = service.add(&movie).unwrap();
        assert_eq!(entry.movie_id, "603");
        assert_eq!(entry.title, "The Matrix");
        assert!(service.contains(603));

        // Another account sees nothing of it.
        sessions.register("hicks@weyland.com", "sulaco").unwrap();
        assert!(service.list().is_empty());
        assert!(!service.contains(603));

        // Back as the first account the entry is still there.
        sessions.login("ripley@weyland.com", "nostromo").unwrap();
        assert_eq!(service.list(), vec![entry]);
    }

    #[test]
    fn test_logout_hides_but_keeps_entries() {
        let (service, sessions) = test_service();
        sessions.register("ripley@weyland.com", "nostromo").unwrap();
        service.add(&sample_movie(603, "The Matrix")).unwrap();

        sessions.logout();
        assert!(service.list().is_empty());
        assert!(!service.contains(603));

        sessions.login("ripley@weyland.com", "nostromo").unwrap();
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_remove_only_touches_own_entry() {
        let (service, sessions) = test_service();
        let movie = sample_movie(603, "The Matrix");

        sessions.register("ripley@weyland.com", "nostromo").unwrap();
        service.add(&movie).unwrap();

        sessions.register("hicks@weyland.com", "sulaco").unwrap();
        service.add(&movie).unwrap();
        service.remove(603).unwrap();
        assert!(!service.contains(603));

        sessions.login("ripley@weyland.com", "nostromo").unwrap();
        assert!(service.contains(603));
    }
}
