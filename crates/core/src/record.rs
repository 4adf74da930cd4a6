//! History record types
//!
//! [`HistoryRecord`] is the persisted recency-list entry;
//! [`Visit`] is the caller-facing input form without a timestamp.
//! The store assigns the timestamp at insertion time so callers cannot
//! forge it.

use crate::types::EntityKind;
use serde::{Deserialize, Serialize};

/// A single entry in the recency list
///
/// Records are keyed by `id` for de-duplication: the store holds at
/// most one record per `id` at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Stable identifier of the visited entity
    pub id: String,
    /// Display title
    pub title: String,
    /// Kind of the visited entity
    pub kind: EntityKind,
    /// Identifier of the owning trail
    pub trail_id: String,
    /// Milliseconds since epoch, assigned by the store at insertion
    pub timestamp: i64,
    /// Navigable location associated with the record
    pub path: String,
}

/// A visit event reported by a UI collaborator
///
/// Identical to [`HistoryRecord`] minus the timestamp. Fields are not
/// validated; a missing or malformed field is the caller's
/// responsibility.
///
/// # Examples
///
/// ```
/// use devroad_core::record::Visit;
/// use devroad_core::types::EntityKind;
///
/// let visit = Visit::new("java-intro", "Introdução ao Java", EntityKind::Concept)
///     .trail("java")
///     .path("/trail/java/concept/java-intro");
/// assert_eq!(visit.id, "java-intro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Stable identifier of the visited entity
    pub id: String,
    /// Display title
    pub title: String,
    /// Kind of the visited entity
    pub kind: EntityKind,
    /// Identifier of the owning trail
    pub trail_id: String,
    /// Navigable location associated with the record
    pub path: String,
}

impl Visit {
    /// Create a visit with empty trail and path
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            trail_id: String::new(),
            path: String::new(),
        }
    }

    /// Set the owning trail identifier
    pub fn trail(mut self, trail_id: impl Into<String>) -> Self {
        self.trail_id = trail_id.into();
        self
    }

    /// Set the navigable path
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Attach a store-assigned timestamp, producing the persisted form
    pub fn into_record(self, timestamp: i64) -> HistoryRecord {
        HistoryRecord {
            id: self.id,
            title: self.title,
            kind: self.kind,
            trail_id: self.trail_id,
            timestamp,
            path: self.path,
        }
    }
}
