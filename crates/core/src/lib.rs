//! Core types for the DevRoad session core
//!
//! This crate defines the fundamental types shared by every other crate
//! in the workspace:
//! - [`HistoryRecord`] / [`Visit`]: the recency-list entry and its
//!   caller-facing input form
//! - [`EntityKind`]: the closed set of navigable entity kinds
//! - [`SessionId`]: unique identifier for an application session
//! - [`Error`] / [`Result`]: the core error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod types;

pub use error::{Error, Result};
pub use record::{HistoryRecord, Visit};
pub use types::{now_millis, EntityKind, SessionId};
