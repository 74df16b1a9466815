//! Key-value storage port for persisted client state.

use crate::error::StorageError;

/// String key-value storage, the persistence boundary of the cart.
///
/// Calls are synchronous: a cart mutation reads, modifies and writes its
/// state within a single call.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
