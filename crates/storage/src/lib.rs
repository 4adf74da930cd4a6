//! Storage backends for the session core
//!
//! This crate defines the persistence seam: a small key/payload
//! interface shaped like browser local storage, with two backends:
//! - [`MemoryBackend`]: in-process map, nothing touches disk
//! - [`FileBackend`]: one file per key under a directory
//!
//! The history store takes the backend as an injected dependency so
//! tests can substitute the in-memory fake for the real thing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod file;
pub mod memory;

pub use backend::StorageBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;
