//! Main session entry point.
//!
//! This module provides the `DevRoad` struct, the primary entry point
//! for the session core, and its builder.

use crate::error::{Error, Result};
use devroad_concepts as concepts;
use devroad_core::{HistoryRecord, SessionId, Visit};
use devroad_history::{HistoryStore, HISTORY_CAPACITY};
use devroad_storage::{FileBackend, MemoryBackend, StorageBackend};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A DevRoad session.
///
/// One instance exists per application session. Create it with
/// [`DevRoad::open`], [`DevRoad::ephemeral`], or [`DevRoad::builder`].
///
/// # Example
///
/// ```ignore
/// use devroad::prelude::*;
///
/// let session = DevRoad::open("./devroad-data")?;
///
/// session.history.add(Visit::new("java-intro", "Introdução ao Java", EntityKind::Concept))?;
/// let shortcuts = session.history.recent_default();
///
/// let id = session.concepts.resolve("Herança");
/// ```
pub struct DevRoad {
    /// Browsing-history operations
    pub history: History,

    /// Concept resolution operations
    pub concepts: Concepts,

    session_id: SessionId,
}

impl DevRoad {
    /// Open a file-backed session at the given directory.
    ///
    /// The directory is created if needed; the history store hydrates
    /// from any payload persisted by a previous session.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(dir).open()
    }

    /// Create an ephemeral session with no disk I/O.
    ///
    /// Creates no files, loses all history when dropped. Use for unit
    /// tests and throwaway sessions.
    pub fn ephemeral() -> Self {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        Self::from_backend(backend, HISTORY_CAPACITY)
    }

    /// Create a builder for session configuration.
    pub fn builder() -> DevRoadBuilder {
        DevRoadBuilder::new()
    }

    /// Identifier of this session instance.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    fn from_backend(backend: Arc<dyn StorageBackend>, capacity: usize) -> Self {
        let store = Arc::new(HistoryStore::with_capacity(backend, capacity));
        Self {
            history: History { store },
            concepts: Concepts,
            session_id: SessionId::new(),
        }
    }
}

/// Builder for session configuration.
///
/// # Example
///
/// ```ignore
/// // Production: file-backed at a fixed directory
/// let session = DevRoad::builder()
///     .path("./devroad-data")
///     .open()?;
///
/// // Testing: small capacity, nothing on disk
/// let session = DevRoad::builder()
///     .capacity(3)
///     .open_ephemeral();
/// ```
pub struct DevRoadBuilder {
    path: Option<PathBuf>,
    capacity: usize,
}

impl DevRoadBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            path: None,
            capacity: HISTORY_CAPACITY,
        }
    }

    /// Set the storage directory for a file-backed session.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the history capacity.
    ///
    /// A testing hook; production sessions use the default of
    /// [`HISTORY_CAPACITY`] (50).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Open the session.
    ///
    /// File-backed when a path was configured, ephemeral otherwise.
    pub fn open(self) -> Result<DevRoad> {
        let backend: Arc<dyn StorageBackend> = match self.path {
            Some(dir) => Arc::new(FileBackend::open(dir).map_err(Error::from)?),
            None => Arc::new(MemoryBackend::new()),
        };
        Ok(DevRoad::from_backend(backend, self.capacity))
    }

    /// Open an ephemeral session, ignoring any configured path.
    pub fn open_ephemeral(self) -> DevRoad {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        DevRoad::from_backend(backend, self.capacity)
    }
}

impl Default for DevRoadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Browsing-history operations.
///
/// Access via `session.history`.
pub struct History {
    store: Arc<HistoryStore>,
}

impl History {
    /// Record a visit.
    ///
    /// The store assigns the timestamp; any existing record with the
    /// same `id` is evicted and the list is truncated to capacity.
    ///
    /// # Example
    ///
    /// ```ignore
    /// session.history.add(
    ///     Visit::new("java-intro", "Introdução ao Java", EntityKind::Concept)
    ///         .trail("java")
    ///         .path("/trail/java/concept/java-intro"),
    /// )?;
    /// ```
    pub fn add(&self, visit: Visit) -> Result<HistoryRecord> {
        self.store.add(visit).map_err(Error::from)
    }

    /// Empty the history and persist the empty state.
    pub fn clear(&self) -> Result<()> {
        self.store.clear().map_err(Error::from)
    }

    /// The `limit` most recent records, most-recent-first.
    pub fn recent(&self, limit: usize) -> Vec<HistoryRecord> {
        self.store.recent(limit)
    }

    /// The default shortcut list (10 most recent records).
    pub fn recent_default(&self) -> Vec<HistoryRecord> {
        self.store.recent_default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Concept resolution operations.
///
/// Access via `session.concepts`. All operations are pure lookups
/// against the build-time title table.
pub struct Concepts;

impl Concepts {
    /// Look up a display title; `None` if not in the table.
    pub fn from_title(&self, title: &str) -> Option<&'static str> {
        concepts::concept_id_from_title(title)
    }

    /// Resolve a title or identifier, falling back to the input.
    pub fn resolve<'a>(&self, title_or_id: &'a str) -> Cow<'a, str> {
        concepts::resolve_concept_id(title_or_id)
    }

    /// Whether the input already carries a recognized namespace prefix.
    pub fn is_id(&self, s: &str) -> bool {
        concepts::is_concept_id(s)
    }
}
