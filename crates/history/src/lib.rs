//! Browsing-history store for the session core
//!
//! Maintains the bounded, de-duplicated, most-recent-first list of
//! visited entities and persists it through an injected
//! [`StorageBackend`](devroad_storage::StorageBackend) after every
//! mutation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::{HistoryStore, DEFAULT_RECENT_LIMIT, HISTORY_CAPACITY, STORAGE_KEY};
