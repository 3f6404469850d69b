// App composition root

use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::auth::SessionStore;
use crate::catalog::{CatalogClient, TmdbClient};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::search::QueryController;
use crate::storage::{MemoryBackend, SledBackend, StorageBackend, TableStore};
use crate::watchlist::{WatchlistService, WatchlistStore};

/// The wired-up core a frontend talks to.
///
/// [`App::open`] builds the whole object graph from one config: durable
/// storage, the session store, the session-gated watchlist and the search
/// controller. The fields are the public surface.
///
/// Must be created inside a tokio runtime; the search controller spawns
/// its tasks at construction.
pub struct App {
    pub sessions: Arc<SessionStore>,
    pub watchlist: WatchlistService,
    pub search: QueryController,
}

impl App {
    /// Opens the durable core at `config.storage.path` against the real
    /// TMDB catalog.
    pub fn open(config: &AppConfig) -> AppResult<Self> {
        let backend = SledBackend::open(&config.storage.path)?;
        info!("Opened store at {}", config.storage.path.display());
        let catalog: Arc<dyn CatalogClient> = Arc::new(TmdbClient::new(&config.tmdb));
        Ok(Self::assemble(
            Arc::new(backend),
            catalog,
            config.search.debounce(),
        ))
    }

    /// Same wiring with no disk behind it, for tests and demos.
    pub fn in_memory(catalog: Arc<dyn CatalogClient>, debounce: Duration) -> Self {
        Self::assemble(Arc::new(MemoryBackend::new()), catalog, debounce)
    }

    fn assemble(
        backend: Arc<dyn StorageBackend>,
        catalog: Arc<dyn CatalogClient>,
        debounce: Duration,
    ) -> Self {
        let tables = TableStore::new(backend);
        let sessions = Arc::new(SessionStore::new(tables.clone()));
        let watchlist =
            WatchlistService::new(Arc::clone(&sessions), WatchlistStore::new(tables));
        let search = QueryController::new(catalog, debounce);
        Self {
            sessions,
            watchlist,
            search,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{MockCatalog, Movie};
    use crate::search::SearchPhase;
    use crate::watchlist::WatchlistError;

    use super::*;

    fn sample_movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            overview: String::new(),
            release_date: Some("2010-07-15".to_string()),
            vote_average: 8.3,
        }
    }

    #[tokio::test]
    async fn test_register_add_logout_walkthrough() {
        let app = App::in_memory(Arc::new(MockCatalog::new()), Duration::from_millis(1));
        let inception = sample_movie(27205, "Inception");

        app.sessions.register("ripley@weyland.com", "nostromo").unwrap();
        app.watchlist.add(&inception).unwrap();

        let entries = app.watchlist.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Inception");
        assert!(app.watchlist.contains(27205));

        app.sessions.logout();
        assert!(app.watchlist.list().is_empty());
        assert_eq!(
            app.watchlist.add(&inception).unwrap_err(),
            WatchlistError::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_demo_account_works_out_of_the_box() {
        let app = App::in_memory(Arc::new(MockCatalog::new()), Duration::from_millis(1));

        let session = app.sessions.login("demo@example.com", "demo123").unwrap();
        assert_eq!(session.account_id, crate::auth::DEMO_ACCOUNT_ID);
        assert!(app.watchlist.list().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_wired_through_the_app() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.set_search_result("inception", Ok(vec![sample_movie(27205, "Inception")]));
        let app = App::in_memory(catalog, Duration::from_millis(300));
        let mut rx = app.search.subscribe();

        app.search.set_query("inception");
        loop {
            if rx.borrow_and_update().phase == SearchPhase::Settled {
                break;
            }
            rx.changed().await.unwrap();
        }
        assert_eq!(app.search.snapshot().movies[0].title, "Inception");
    }
}
