//! Fundamental identifier and time types
//!
//! This module defines the types used throughout the system:
//! - [`SessionId`]: unique identifier for an application session
//! - [`EntityKind`]: the closed enumeration of navigable entity kinds
//! - [`now_millis`]: the store-assigned timestamp source

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an application session
///
/// A session owns exactly one history store instance. SessionId is
/// never persisted with the history payload; it identifies the live
/// instance for diagnostics.
///
/// # Examples
///
/// ```
/// use devroad_core::types::SessionId;
///
/// let id1 = SessionId::new();
/// let id2 = SessionId::new();
/// assert_ne!(id1, id2); // Each SessionId is unique
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random SessionId using UUID v4
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }

    /// Create SessionId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        SessionId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a navigable entity
///
/// Closed enumeration; the persisted form uses lowercase names so the
/// JSON payload stays compatible with values written by earlier
/// front-end builds.
///
/// # Examples
///
/// ```
/// use devroad_core::types::EntityKind;
///
/// let kind: EntityKind = serde_json::from_str("\"concept\"").unwrap();
/// assert_eq!(kind, EntityKind::Concept);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A top-level learning path grouping stages
    Trail,
    /// A subdivision of a trail containing concepts
    Stage,
    /// An individual lesson unit, the finest-grained navigable entity
    Concept,
    /// A practical exercise associated with a trail
    Project,
}

impl EntityKind {
    /// Stable lowercase name, matching the persisted form
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Trail => "trail",
            EntityKind::Stage => "stage",
            EntityKind::Concept => "concept",
            EntityKind::Project => "project",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
///
/// The history store assigns timestamps with this function; callers
/// never supply their own.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== SessionId Tests =====

    #[test]
    fn test_session_id_creation() {
        let id1 = SessionId::new();
        let id2 = SessionId::new();
        assert_ne!(id1, id2, "Each SessionId should be unique");
    }

    #[test]
    fn test_session_id_byte_roundtrip() {
        let id = SessionId::new();
        let bytes = *id.as_bytes();
        let restored = SessionId::from_bytes(bytes);
        assert_eq!(id, restored, "SessionId should roundtrip through bytes");
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new();
        let s = format!("{}", id);
        assert!(!s.is_empty(), "Display format should produce non-empty string");
        assert!(s.contains('-'), "UUID should contain hyphens");
    }

    // ===== EntityKind Tests =====

    #[test]
    fn test_entity_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EntityKind::Trail).unwrap();
        assert_eq!(json, "\"trail\"");
        let json = serde_json::to_string(&EntityKind::Project).unwrap();
        assert_eq!(json, "\"project\"");
    }

    #[test]
    fn test_entity_kind_roundtrip() {
        for kind in [
            EntityKind::Trail,
            EntityKind::Stage,
            EntityKind::Concept,
            EntityKind::Project,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: EntityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back, "EntityKind should roundtrip through JSON");
        }
    }

    #[test]
    fn test_entity_kind_display_matches_serde() {
        let json = serde_json::to_string(&EntityKind::Stage).unwrap();
        assert_eq!(json, format!("\"{}\"", EntityKind::Stage));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = serde_json::from_str::<EntityKind>("\"lesson\"");
        assert!(result.is_err(), "Kinds outside the closed set should fail to parse");
    }

    // ===== Timestamp Tests =====

    #[test]
    fn test_now_millis_non_decreasing() {
        let t1 = now_millis();
        let t2 = now_millis();
        assert!(t2 >= t1, "Wall clock millis should be non-decreasing");
    }
}
