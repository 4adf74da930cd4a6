//! Concept title resolution
//!
//! Translates human-readable lesson titles into canonical concept
//! identifiers. The title table is fixed at build time; resolution is
//! pure and tolerates both already-valid identifiers and unknown
//! titles.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod resolver;

pub use index::{concept_id_from_title, NAMESPACE_PREFIXES};
pub use resolver::{is_concept_id, resolve_concept_id};
