// Durable key-value storage for the app's record tables.
//
// A `StorageBackend` moves raw bytes (sled on disk, or an in-memory map
// for tests); `TableStore` layers typed, deliberately lenient table access
// on top. Every other module goes through `TableStore` and never sees
// backend errors.

mod backend;
mod error;
mod tables;

// Re-export public API
pub use backend::{MemoryBackend, SledBackend, StorageBackend};
pub use error::{StorageError, StorageResult};
pub use tables::TableStore;
