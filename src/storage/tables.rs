// Typed table access over a storage backend

use std::sync::Arc;

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::StorageBackend;
use super::error::StorageResult;

/// Typed access to whole persisted record tables.
///
/// Each table is one JSON-encoded record list stored under a well-known
/// name. Reads never fail: an absent table, a backend that cannot be
/// reached, or bytes that no longer decode all come back as an empty list,
/// so one damaged table cannot take the app down. Writes replace the table
/// wholesale; a failed write keeps the previous durable value and is
/// logged rather than surfaced.
#[derive(Clone)]
pub struct TableStore {
    backend: Arc<dyn StorageBackend>,
}

impl TableStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// All records in `table`, or an empty list when the table is absent,
    /// unreadable or corrupt.
    pub fn read<T: DeserializeOwned>(&self, table: &str) -> Vec<T> {
        let bytes = match self.backend.load(table) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!("Failed to load table '{}': {}", table, err);
                return Vec::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                warn!("Table '{}' no longer decodes, treating it as empty: {}", table, err);
                Vec::new()
            }
        }
    }

    /// Replaces `table` with `records`. Failures are logged and swallowed;
    /// the in-memory state the caller derived stays authoritative for the
    /// rest of the run.
    pub fn write<T: Serialize>(&self, table: &str, records: &[T]) {
        if let Err(err) = self.try_write(table, records) {
            error!("Failed to write table '{}': {}", table, err);
        }
    }

    fn try_write<T: Serialize>(&self, table: &str, records: &[T]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(records)?;
        self.backend.store(table, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::{MemoryBackend, StorageError};

    use super::*;

    struct BrokenBackend;

    impl StorageBackend for BrokenBackend {
        fn load(&self, _table: &str) -> StorageResult<Option<Vec<u8>>> {
            Err(StorageError::Backend("disk on fire".to_string()))
        }

        fn store(&self, _table: &str, _bytes: &[u8]) -> StorageResult<()> {
            Err(StorageError::Backend("disk on fire".to_string()))
        }
    }

    fn memory_store() -> (TableStore, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        (TableStore::new(backend.clone()), backend)
    }

    #[test]
    fn test_missing_table_reads_empty() {
        let (tables, _) = memory_store();
        let records: Vec<String> = tables.read("nothing-here");
        assert!(records.is_empty());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let (tables, _) = memory_store();
        tables.write("names", &["ripley".to_string(), "hicks".to_string()]);

        let records: Vec<String> = tables.read("names");
        assert_eq!(records, vec!["ripley".to_string(), "hicks".to_string()]);
    }

    #[test]
    fn test_corrupt_table_reads_empty() {
        let (tables, backend) = memory_store();
        backend.store("names", b"{not json at all").unwrap();

        let records: Vec<String> = tables.read("names");
        assert!(records.is_empty());
    }

    #[test]
    fn test_wrong_shape_reads_empty() {
        let (tables, backend) = memory_store();
        // Valid JSON, but not a list of the expected record type.
        backend.store("names", br#"{"a": 1}"#).unwrap();

        let records: Vec<String> = tables.read("names");
        assert!(records.is_empty());
    }

    #[test]
    fn test_backend_failures_degrade_without_panicking() {
        let tables = TableStore::new(Arc::new(BrokenBackend));

        let records: Vec<String> = tables.read("names");
        assert!(records.is_empty());

        // The write fails inside the backend; callers never see it.
        tables.write("names", &["ripley".to_string()]);
    }
}
