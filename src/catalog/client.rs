// Catalog client trait

use async_trait::async_trait;

use super::error::CatalogResult;
use super::models::{Movie, MovieDetails};

/// Remote movie-catalog operations the core consumes.
///
/// The catalog is an external collaborator, so it sits behind this trait:
/// [`TmdbClient`](super::TmdbClient) speaks the real protocol, while
/// [`MockCatalog`](super::MockCatalog) lets tests script responses and
/// response timing.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Full-text title search.
    ///
    /// An empty or whitespace-only query short-circuits to no results
    /// without touching the network.
    async fn search_movies(&self, query: &str) -> CatalogResult<Vec<Movie>>;

    /// Single-movie lookup by catalog id.
    ///
    /// Fails with [`CatalogError::NotFound`](super::CatalogError::NotFound)
    /// when the id matches nothing, and
    /// [`CatalogError::Unavailable`](super::CatalogError::Unavailable) for
    /// transport or server trouble.
    async fn movie_details(&self, movie_id: u64) -> CatalogResult<MovieDetails>;

    /// One page of the catalog's popular listing. Pages start at 1.
    async fn popular_movies(&self, page: u32) -> CatalogResult<Vec<Movie>>;
}
