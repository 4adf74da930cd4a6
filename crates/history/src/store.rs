//! The recency-list store
//!
//! Invariants maintained across every operation:
//! - at most one record per `id` (insertion evicts the prior record)
//! - at most [`HISTORY_CAPACITY`] records, most-recent-first, with
//!   tail eviction beyond capacity
//! - timestamps are store-assigned and non-decreasing in insertion
//!   order

use devroad_core::{now_millis, HistoryRecord, Result, Visit};
use devroad_storage::StorageBackend;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum number of records the store retains
pub const HISTORY_CAPACITY: usize = 50;

/// Default limit for [`HistoryStore::recent_default`]
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Backend key under which the history payload is persisted
pub const STORAGE_KEY: &str = "devroad.history";

/// The browsing-history store
///
/// One instance exists per application session. The store hydrates
/// from the backend at construction and persists the full list
/// synchronously after every mutation.
///
/// # Example
///
/// ```ignore
/// use devroad_history::HistoryStore;
/// use devroad_storage::MemoryBackend;
/// use std::sync::Arc;
///
/// let store = HistoryStore::hydrate(Arc::new(MemoryBackend::new()));
/// store.add(visit)?;
/// let shortcuts = store.recent_default();
/// ```
pub struct HistoryStore {
    backend: Arc<dyn StorageBackend>,
    records: RwLock<Vec<HistoryRecord>>,
    capacity: usize,
}

impl HistoryStore {
    /// Create a store hydrated from `backend` with the default capacity
    ///
    /// Absent persisted data starts the store empty. Malformed data is
    /// logged and discarded; hydration never fails.
    pub fn hydrate(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_capacity(backend, HISTORY_CAPACITY)
    }

    /// Create a store hydrated from `backend` with a custom capacity
    ///
    /// Intended for tests; production sessions use [`HISTORY_CAPACITY`].
    pub fn with_capacity(backend: Arc<dyn StorageBackend>, capacity: usize) -> Self {
        let records = match backend.load(STORAGE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<HistoryRecord>>(&payload) {
                Ok(records) => normalize(records, capacity),
                Err(e) => {
                    warn!(error = %e, "discarding malformed history payload");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to load persisted history, starting empty");
                Vec::new()
            }
        };
        debug!(records = records.len(), capacity, "history store hydrated");
        Self {
            backend,
            records: RwLock::new(records),
            capacity,
        }
    }

    /// Record a visit
    ///
    /// Assigns the timestamp, evicts any existing record with the same
    /// `id`, prepends the new record, truncates to capacity, and
    /// persists the result. Returns the record as stored.
    ///
    /// Persistence failure is the only error path; the in-memory list
    /// is already updated when it is reported.
    pub fn add(&self, visit: Visit) -> Result<HistoryRecord> {
        let snapshot;
        let record;
        {
            let mut records = self.records.write();
            // Clamp against the head so the non-decreasing timestamp
            // invariant holds even if the wall clock steps backwards.
            let floor = records.first().map(|r| r.timestamp).unwrap_or(i64::MIN);
            record = visit.into_record(now_millis().max(floor));
            records.retain(|r| r.id != record.id);
            records.insert(0, record.clone());
            records.truncate(self.capacity);
            snapshot = records.clone();
        }
        self.persist(&snapshot)?;
        Ok(record)
    }

    /// Empty the list and persist the empty state
    pub fn clear(&self) -> Result<()> {
        self.records.write().clear();
        self.persist(&[])
    }

    /// The `limit` most recent records, most-recent-first
    ///
    /// Does not mutate state. Fewer than `limit` records present
    /// returns all of them; `limit == 0` returns an empty vector.
    pub fn recent(&self, limit: usize) -> Vec<HistoryRecord> {
        self.records.read().iter().take(limit).cloned().collect()
    }

    /// The [`DEFAULT_RECENT_LIMIT`] most recent records
    pub fn recent_default(&self) -> Vec<HistoryRecord> {
        self.recent(DEFAULT_RECENT_LIMIT)
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// The configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn persist(&self, records: &[HistoryRecord]) -> Result<()> {
        let payload = serde_json::to_string(records)?;
        self.backend.store(STORAGE_KEY, &payload)?;
        debug!(records = records.len(), "history persisted");
        Ok(())
    }
}

/// Re-apply the dedup and capacity invariants to hydrated data
///
/// Persisted artifacts normally satisfy them already, but an artifact
/// written by another tool (or edited by hand) is not trusted.
fn normalize(records: Vec<HistoryRecord>, capacity: usize) -> Vec<HistoryRecord> {
    let mut seen = HashSet::new();
    let mut out: Vec<HistoryRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect();
    out.truncate(capacity);
    out
}
