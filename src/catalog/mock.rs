// Scriptable catalog for tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::client::CatalogClient;
use super::error::{CatalogError, CatalogResult};
use super::models::{Movie, MovieDetails};

/// In-memory [`CatalogClient`] that answers from scripted responses.
///
/// Tests preload results per query, attach artificial latency to chosen
/// calls so completions can be reordered, and afterwards inspect exactly
/// which requests the code under test made. Unscripted searches answer
/// with no results rather than an error.
pub struct MockCatalog {
    search_results: Mutex<HashMap<String, CatalogResult<Vec<Movie>>>>,
    search_delays: Mutex<HashMap<String, Duration>>,
    popular_result: Mutex<CatalogResult<Vec<Movie>>>,
    popular_delay: Mutex<Option<Duration>>,
    details: Mutex<HashMap<u64, MovieDetails>>,
    search_calls: Mutex<Vec<String>>,
    popular_calls: AtomicUsize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            search_results: Mutex::new(HashMap::new()),
            search_delays: Mutex::new(HashMap::new()),
            popular_result: Mutex::new(Ok(Vec::new())),
            popular_delay: Mutex::new(None),
            details: Mutex::new(HashMap::new()),
            search_calls: Mutex::new(Vec::new()),
            popular_calls: AtomicUsize::new(0),
        }
    }

    /// Scripts the outcome of `search_movies` for one exact query.
    pub fn set_search_result(&self, query: &str, result: CatalogResult<Vec<Movie>>) {
        self.search_results
            .lock()
            .unwrap()
            .insert(query.to_string(), result);
    }

    /// Delays the completion of `search_movies(query)` by `delay`.
    pub fn set_search_delay(&self, query: &str, delay: Duration) {
        self.search_delays
            .lock()
            .unwrap()
            .insert(query.to_string(), delay);
    }

    /// Scripts the outcome of every `popular_movies` call.
    pub fn set_popular_result(&self, result: CatalogResult<Vec<Movie>>) {
        *self.popular_result.lock().unwrap() = result;
    }

    /// Delays the completion of every `popular_movies` call.
    pub fn set_popular_delay(&self, delay: Duration) {
        *self.popular_delay.lock().unwrap() = Some(delay);
    }

    /// Scripts a `movie_details` answer, keyed by the movie's id.
    pub fn set_details(&self, details: MovieDetails) {
        self.details
            .lock()
            .unwrap()
            .insert(details.movie.id, details);
    }

    /// Every query `search_movies` was called with, in call order.
    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn search_count(&self) -> usize {
        self.search_calls.lock().unwrap().len()
    }

    pub fn popular_count(&self) -> usize {
        self.popular_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn search_movies(&self, query: &str) -> CatalogResult<Vec<Movie>> {
        self.search_calls.lock().unwrap().push(query.to_string());

        let delay = self.search_delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.search_results.lock().unwrap().get(query) {
            Some(result) => result.clone(),
            None => Ok(Vec::new()),
        }
    }

    async fn movie_details(&self, movie_id: u64) -> CatalogResult<MovieDetails> {
        match self.details.lock().unwrap().get(&movie_id) {
            Some(details) => Ok(details.clone()),
            None => Err(CatalogError::NotFound(movie_id.to_string())),
        }
    }

    async fn popular_movies(&self, _page: u32) -> CatalogResult<Vec<Movie>> {
        self.popular_calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.popular_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.popular_result.lock().unwrap().clone()
    }
}
