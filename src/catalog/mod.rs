// The external movie catalog (TMDB).
//
// Everything network-shaped lives here: the `CatalogClient` trait is the
// seam the rest of the crate depends on, `TmdbClient` is the real thing,
// `MockCatalog` the scriptable stand-in for tests and offline use.

mod client;
mod error;
mod images;
mod mock;
mod models;
mod tmdb;

// Re-export public API
pub use client::CatalogClient;
pub use error::{CatalogError, CatalogResult};
pub use images::{backdrop_url, poster_url, BackdropSize, PosterSize};
pub use mock::MockCatalog;
pub use models::{Genre, Movie, MovieDetails};
pub use tmdb::TmdbClient;
