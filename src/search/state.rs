// Search state snapshot

use crate::catalog::{CatalogError, Movie};

/// Lifecycle of the text currently in the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No query text; the popular listing is what the view shows.
    Idle,
    /// Text typed, debounce timer armed, nothing sent yet.
    Pending,
    /// Debounce elapsed and a request is on the wire.
    InFlight,
    /// A response (or failure) for the typed query has been applied.
    Settled,
}

/// What the presentation layer renders: the latest applied state of the
/// search box, its results and any failure.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    pub query: String,
    pub phase: SearchPhase,
    /// True while any fetch (search or popular) is outstanding.
    pub loading: bool,
    pub movies: Vec<Movie>,
    /// Present when the last applied fetch failed. Zero movies with no
    /// error is a genuine empty result, not a failure.
    pub error: Option<CatalogError>,
}

impl SearchSnapshot {
    pub(super) fn initial() -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
            loading: false,
            movies: Vec::new(),
            error: None,
        }
    }
}
