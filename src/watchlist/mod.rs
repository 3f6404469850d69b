// Per-account watch-later lists.
//
// `WatchlistStore` does the table work and takes account ids on trust;
// `WatchlistService` sits in front of it and turns "who is logged in"
// into that account id, refusing or degrading when nobody is.

mod error;
mod models;
mod service;
mod store;

// Re-export public API
pub use error::{WatchlistError, WatchlistResult};
pub use models::{NewEntry, WatchlistEntry};
pub use service::WatchlistService;
pub use store::{WatchlistStore, WATCHLIST_TABLE};
