//! Convenient imports for the session core.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```ignore
//! use devroad::prelude::*;
//!
//! let session = DevRoad::ephemeral();
//! session.history.add(Visit::new("java-intro", "Introdução ao Java", EntityKind::Concept))?;
//! ```

// Main entry point
pub use crate::session::{DevRoad, DevRoadBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use devroad_core::{EntityKind, HistoryRecord, SessionId, Visit};

// Resolver functions
pub use devroad_concepts::{concept_id_from_title, is_concept_id, resolve_concept_id};
