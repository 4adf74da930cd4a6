//! File-backed storage backend
//!
//! Persists each key as a file under the backend directory. This is
//! the durable analog of the browser's local storage area: a flat
//! namespace of string payloads that survives across sessions.

use crate::backend::StorageBackend;
use devroad_core::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable backend: one file per key under a directory
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this backend writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(key, "no persisted payload");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, key: &str, payload: &str) -> Result<()> {
        // Write-then-rename so a partial write never clobbers the
        // previous payload.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.tmp"));
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        debug!(key, bytes = payload.len(), "persisted payload");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("backend");
        let backend = FileBackend::open(&dir).unwrap();
        assert!(backend.dir().is_dir(), "open should create the directory");
    }

    #[test]
    fn load_absent_returns_none() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(tmp.path()).unwrap();
        assert!(backend.load("missing").unwrap().is_none());
    }

    #[test]
    fn store_then_load_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(tmp.path()).unwrap();

        backend.store("devroad.history", "[{\"id\":\"x\"}]").unwrap();
        let loaded = backend.load("devroad.history").unwrap();
        assert_eq!(loaded.as_deref(), Some("[{\"id\":\"x\"}]"));
    }

    #[test]
    fn store_replaces_previous_payload() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(tmp.path()).unwrap();

        backend.store("k", "first").unwrap();
        backend.store("k", "second").unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn payload_survives_backend_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let backend = FileBackend::open(tmp.path()).unwrap();
            backend.store("k", "payload").unwrap();
        }
        let backend = FileBackend::open(tmp.path()).unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("payload"));
    }

    #[test]
    fn remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(tmp.path()).unwrap();

        backend.store("k", "payload").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert!(backend.load("k").unwrap().is_none());
    }
}
