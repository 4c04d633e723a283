//! Key-value store trait definition.

use async_trait::async_trait;

use crate::error::StoreError;

/// Options for a [`KvStore::put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PutOptions {
    /// Store-level expiration in seconds, counted from the write.
    pub expiration_ttl: u64,
}

impl PutOptions {
    /// Creates options expiring the value after `expiration_ttl` seconds.
    pub fn new(expiration_ttl: u64) -> Self {
        Self { expiration_ttl }
    }
}

/// A string key-value store with store-level expiration.
///
/// This trait abstracts over the storage that keeps cached origin responses
/// (in-process, managed KV services, Redis, etc.). The proxy only needs plain
/// get/put semantics: no transactions, no compare-and-swap, no deletes.
///
/// # Implementors
///
/// - `MemoryKvStore` - In-process store backed by Moka
///
/// # Example
///
/// ```ignore
/// use edgecache_backend::{KvStore, PutOptions, StoreError};
///
/// struct MyStore;
///
/// #[async_trait]
/// impl KvStore for MyStore {
///     async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
///         Ok(None)
///     }
///
///     async fn put(&self, key: &str, value: String, options: PutOptions) -> Result<(), StoreError> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "my-store"
///     }
/// }
/// ```
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: String, options: PutOptions) -> Result<(), StoreError>;

    /// Returns the name of this store.
    ///
    /// This is used for logging and the health endpoint.
    fn name(&self) -> &str;

    /// Performs a health check on the store.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
