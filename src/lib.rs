//! # DevRoad Session Core
//!
//! Embeddable session core for the DevRoad learning tracker.
//!
//! The core has two independent units:
//! - a browsing-**history** store: bounded, de-duplicated,
//!   most-recent-first list of visited entities, persisted through a
//!   pluggable storage backend
//! - a **concept** resolver: static title-to-identifier table with
//!   tolerant fallback resolution
//!
//! ## Quick Start
//!
//! ```ignore
//! use devroad::prelude::*;
//!
//! // Open a file-backed session
//! let session = DevRoad::open("./devroad-data")?;
//!
//! // Record a visit (the store assigns the timestamp)
//! session.history.add(
//!     Visit::new("java-oop-inheritance", "Herança", EntityKind::Concept)
//!         .trail("java")
//!         .path("/trail/java/concept/java-oop-inheritance"),
//! )?;
//!
//! // Render the shortcut list
//! for record in session.history.recent_default() {
//!     println!("{} ({})", record.title, record.path);
//! }
//!
//! // Turn a display title into a routable identifier
//! let id = resolve_concept_id("Herança");
//! ```
//!
//! ## Sessions
//!
//! | Constructor | Disk files | Survives restart |
//! |-------------|------------|------------------|
//! | [`DevRoad::ephemeral()`] | None | No |
//! | [`DevRoad::open(dir)`](DevRoad::open) | One per storage key | Yes |

#![warn(missing_docs)]

mod error;
mod session;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use session::{DevRoad, DevRoadBuilder};

// Re-export core types
pub use devroad_core::{EntityKind, HistoryRecord, SessionId, Visit};

// Re-export the history store and its tuning constants
pub use devroad_history::{HistoryStore, DEFAULT_RECENT_LIMIT, HISTORY_CAPACITY};

// Re-export the resolver
pub use devroad_concepts::{
    concept_id_from_title, is_concept_id, resolve_concept_id, NAMESPACE_PREFIXES,
};
