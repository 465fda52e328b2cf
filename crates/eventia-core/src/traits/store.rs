//! Key-value persistence trait.

use crate::Result;

/// A persistent string key-value store.
///
/// Each key is read and written independently; there is no transaction
/// across keys. Implementations must be cheap to call from async code.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key succeeds.
    fn delete(&self, key: &str) -> Result<()>;
}
