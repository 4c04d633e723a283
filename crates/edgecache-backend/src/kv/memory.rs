//! In-process key-value store using Moka.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use moka::notification::RemovalCause;
use tracing::trace;

use super::traits::{KvStore, PutOptions};
use crate::error::StoreError;

/// Default maximum number of entries.
const DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// Longest expiration kept in memory (one year).
const MAX_EXPIRATION_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
struct StoredValue {
    value: Arc<str>,
    ttl: Duration,
}

/// Expires every value after the TTL it was written with.
struct PerEntryExpiry;

impl Expiry<String, StoredValue> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    // An overwrite restarts the clock with the new TTL
    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Key-value store kept in process memory.
///
/// Thread-safe and async-friendly. Each value expires after the
/// `expiration_ttl` it was written with; when the store is full, Moka
/// evicts by its own admission policy.
///
/// # Examples
///
/// ```
/// use edgecache_backend::{KvStore, MemoryKvStore, PutOptions};
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = MemoryKvStore::new(1_000);
/// store.put("key", "value".to_string(), PutOptions::new(60)).await.unwrap();
///
/// assert_eq!(store.get("key").await.unwrap().as_deref(), Some("value"));
/// # }
/// ```
#[derive(Clone)]
pub struct MemoryKvStore {
    inner: Cache<String, StoredValue>,
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CAPACITY)
    }
}

impl MemoryKvStore {
    /// Creates a store holding at most `max_capacity` entries.
    pub fn new(max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryExpiry)
            .eviction_listener(|key: Arc<String>, _value, cause| {
                let reason = match cause {
                    RemovalCause::Expired => "ttl",
                    RemovalCause::Size => "capacity",
                    RemovalCause::Explicit => "manual",
                    RemovalCause::Replaced => "replaced",
                };
                trace!(key = %key, reason, "Store entry removed");
            })
            .build();

        Self { inner }
    }

    /// Approximate number of live entries.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Runs pending maintenance (expiration, eviction).
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.get(key).await.map(|stored| stored.value.to_string()))
    }

    async fn put(&self, key: &str, value: String, options: PutOptions) -> Result<(), StoreError> {
        let stored = StoredValue {
            value: Arc::from(value),
            ttl: Duration::from_secs(options.expiration_ttl.min(MAX_EXPIRATION_SECS)),
        };
        self.inner.insert(key.to_string(), stored).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemoryKvStore::default();

        store
            .put("https://example.com/a", "hello".to_string(), PutOptions::new(60))
            .await
            .unwrap();

        let value = store.get("https://example.com/a").await.unwrap();
        assert_eq!(value.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_miss_returns_none() {
        let store = MemoryKvStore::default();
        assert!(store.get("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryKvStore::default();

        store.put("k", "first".to_string(), PutOptions::new(60)).await.unwrap();
        store.put("k", "second".to_string(), PutOptions::new(60)).await.unwrap();
        store.sync().await;

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
        assert_eq!(store.entry_count(), 1);
    }

    #[tokio::test]
    async fn test_value_expires_after_ttl() {
        let store = MemoryKvStore::default();

        store.put("short", "v".to_string(), PutOptions::new(1)).await.unwrap();
        store.put("long", "v".to_string(), PutOptions::new(60)).await.unwrap();
        assert!(store.get("short").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(1_200)).await;

        assert!(store.get("short").await.unwrap().is_none());
        assert!(store.get("long").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_keys_are_exact() {
        let store = MemoryKvStore::default();

        store
            .put("https://example.com/a?x=1", "v".to_string(), PutOptions::new(60))
            .await
            .unwrap();

        assert!(store.get("https://example.com/a").await.unwrap().is_none());
        assert!(store.get("https://example.com/a?x=1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_concurrent_access() {
        let store = Arc::new(MemoryKvStore::default());
        let mut handles = vec![];

        for i in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let key = format!("key-{}", i % 5);
                store.put(&key, format!("value-{}", i), PutOptions::new(60)).await.unwrap();
                store.get(&key).await.unwrap()
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }

        store.sync().await;
        assert_eq!(store.entry_count(), 5);
    }

    #[tokio::test]
    async fn test_huge_ttl_is_accepted() {
        let store = MemoryKvStore::default();

        store.put("k", "v".to_string(), PutOptions::new(u64::MAX)).await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_name() {
        assert_eq!(MemoryKvStore::new(1).name(), "memory");
    }
}
