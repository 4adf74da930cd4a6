//! The storage backend trait

use devroad_core::Result;

/// Key/payload persistence, shaped like browser local storage
///
/// Keys are flat strings; payloads are opaque strings (the history
/// store writes JSON). Implementations must be safe to share behind an
/// `Arc` across the session.
///
/// ## Design
///
/// - `load` returns `Ok(None)` for an absent key; only genuine backend
///   failures are errors
/// - `store` replaces the full payload for a key in one call
/// - `remove` is idempotent
pub trait StorageBackend: Send + Sync {
    /// Load the payload stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `payload` under `key`, replacing any previous payload
    fn store(&self, key: &str, payload: &str) -> Result<()>;

    /// Remove the payload stored under `key`
    fn remove(&self, key: &str) -> Result<()>;
}
