//! Client-side core of a movie watchlist app: local accounts and the
//! active session, per-account watch-later lists, and a debounced,
//! ordering-safe driver for catalog search.
//!
//! State persists through a deliberately lenient table store over sled,
//! so a damaged table degrades to "empty" instead of an error. The TMDB
//! catalog sits behind the [`catalog::CatalogClient`] trait; tests run
//! against [`catalog::MockCatalog`]. [`App`] wires the whole thing
//! together from an [`AppConfig`].

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
mod ids;
pub mod search;
pub mod storage;
pub mod watchlist;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
