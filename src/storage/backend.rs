// Storage backends

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use super::error::{StorageError, StorageResult};

/// Raw byte storage keyed by table name.
///
/// Backends only move opaque byte blobs; encoding and leniency live one
/// layer up in [`TableStore`](super::TableStore). Implementations must be
/// safe to share across threads.
pub trait StorageBackend: Send + Sync {
    /// Fetch the bytes stored under `table`, if any.
    fn load(&self, table: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Replace the bytes stored under `table`. Durable once this returns.
    fn store(&self, table: &str, bytes: &[u8]) -> StorageResult<()>;
}

/// Durable backend over a local sled database.
pub struct SledBackend {
    db: sled::Db,
}

impl SledBackend {
    /// Opens (or creates) the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl StorageBackend for SledBackend {
    fn load(&self, table: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.db.get(table)?.map(|bytes| bytes.to_vec()))
    }

    fn store(&self, table: &str, bytes: &[u8]) -> StorageResult<()> {
        self.db.insert(table, bytes)?;
        // Writes must survive process exit, not sit in sled's page cache.
        self.db.flush()?;
        Ok(())
    }
}

/// Volatile backend for tests and demos. Same contract, no disk.
#[derive(Default)]
pub struct MemoryBackend {
    tables: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, table: &str) -> StorageResult<Option<Vec<u8>>> {
        let tables = self
            .tables
            .lock()
            .map_err(|_| StorageError::Backend("memory table lock poisoned".to_string()))?;
        Ok(tables.get(table).cloned())
    }

    fn store(&self, table: &str, bytes: &[u8]) -> StorageResult<()> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| StorageError::Backend("memory table lock poisoned".to_string()))?;
        tables.insert(table.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.load("accounts").unwrap().is_none());

        backend.store("accounts", b"[1,2,3]").unwrap();
        assert_eq!(backend.load("accounts").unwrap().unwrap(), b"[1,2,3]");

        backend.store("accounts", b"[]").unwrap();
        assert_eq!(backend.load("accounts").unwrap().unwrap(), b"[]");
    }

    #[test]
    fn test_sled_backend_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store");

        {
            let backend = SledBackend::open(&path).unwrap();
            backend.store("watchlist", b"persisted").unwrap();
        }

        let backend = SledBackend::open(&path).unwrap();
        assert_eq!(backend.load("watchlist").unwrap().unwrap(), b"persisted");
        assert!(backend.load("missing").unwrap().is_none());
    }
}
