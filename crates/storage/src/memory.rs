//! In-memory storage backend
//!
//! Backs a session with a plain map. Used by ephemeral sessions and as
//! the test substitute for [`FileBackend`](crate::FileBackend).

use crate::backend::StorageBackend;
use devroad_core::Result;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory backend: creates no files, loses all data when dropped
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the backend holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn store(&self, key: &str, payload: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_absent_returns_none() {
        let backend = MemoryBackend::new();
        assert!(backend.load("missing").unwrap().is_none());
    }

    #[test]
    fn store_then_load() {
        let backend = MemoryBackend::new();
        backend.store("k", "payload").unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("payload"));
    }

    #[test]
    fn store_replaces_previous_payload() {
        let backend = MemoryBackend::new();
        backend.store("k", "first").unwrap();
        backend.store("k", "second").unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("second"));
        assert_eq!(backend.len(), 1, "replacement should not grow the map");
    }

    #[test]
    fn remove_is_idempotent() {
        let backend = MemoryBackend::new();
        backend.store("k", "payload").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert!(backend.load("k").unwrap().is_none());
        assert!(backend.is_empty());
    }
}
