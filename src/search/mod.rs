// Debounced catalog search.
//
// `QueryController` owns the debounce timer, the request-id fence that
// keeps slow responses from clobbering newer ones, and the published
// `SearchSnapshot` the presentation layer renders.

mod controller;
mod state;

// Re-export public API
pub use controller::{QueryController, DEFAULT_DEBOUNCE};
pub use state::{SearchPhase, SearchSnapshot};
