//! The proxy decision flow.

use std::sync::Arc;
use std::time::Instant;

use edgecache_backend::{KvStore, Origin, OriginResponse, PutOptions, StoreError};
use edgecache_core::{BodyPattern, CacheEntry, CachePolicy, Clock, ProxyParams, SystemClock};
use tracing::{debug, info, instrument, warn};

use super::{ProxyError, ProxyOutcome};
use crate::metrics::CacheMetrics;

/// Pass-through cache over a key-value store and an origin.
///
/// Each call to [`handle`](Self::handle) runs the whole flow for one request:
///
/// 1. read the stored entry for the URL
/// 2. serve it if the policy considers it fresh
/// 3. otherwise fetch origin
/// 4. if a `regex` was given and the fetched body does not match, serve the
///    previous entry (or the raw body when there is none) without writing
/// 5. otherwise write the new entry with `max(ttl, floor)` seconds of
///    store-level expiration and serve the fetched body
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use edgecache_backend::{HttpOrigin, HttpOriginConfig, MemoryKvStore};
/// use edgecache_core::{CachePolicy, ProxyParams};
/// use edgecache_server::EdgeCache;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = EdgeCache::new(
///     Arc::new(MemoryKvStore::default()),
///     Arc::new(HttpOrigin::new(HttpOriginConfig::default())?),
///     CachePolicy::default(),
/// );
///
/// let params = ProxyParams::new("https://example.com/").with_ttl(30);
/// let outcome = cache.handle(&params).await?;
/// println!("{}: {} bytes", outcome.kind(), outcome.body().len());
/// # Ok(())
/// # }
/// ```
pub struct EdgeCache {
    store: Arc<dyn KvStore>,
    origin: Arc<dyn Origin>,
    policy: CachePolicy,
    clock: Arc<dyn Clock>,
    metrics: CacheMetrics,
}

impl EdgeCache {
    /// Creates an engine using the system clock.
    pub fn new(store: Arc<dyn KvStore>, origin: Arc<dyn Origin>, policy: CachePolicy) -> Self {
        Self {
            store,
            origin,
            policy,
            clock: Arc::new(SystemClock),
            metrics: CacheMetrics::new(),
        }
    }

    /// Replaces the clock used for freshness checks and timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the cache policy.
    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// Returns the cache metrics.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Name of the underlying store.
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Checks that the underlying store is reachable.
    pub async fn store_health(&self) -> Result<(), StoreError> {
        self.store.health_check().await
    }

    /// Runs the proxy flow for one request.
    ///
    /// # Errors
    ///
    /// - `ProxyError::Store` if the store fails on read or write
    /// - `ProxyError::Entry` if the stored value is not a valid entry
    /// - `ProxyError::Origin` if origin cannot be fetched or read
    /// - `ProxyError::Pattern` if the `regex` parameter does not compile
    #[instrument(skip_all, fields(url = %params.url()))]
    pub async fn handle(&self, params: &ProxyParams) -> Result<ProxyOutcome, ProxyError> {
        let url = params.url();
        let ttl = self.policy.effective_ttl(params.ttl());

        let cached = match self.lookup(url).await? {
            Some(entry) if self.policy.is_fresh(&entry, ttl, self.clock.now_millis()) => {
                self.metrics.record_hit();
                debug!(ttl, "Serving fresh entry");
                return Ok(ProxyOutcome::Fresh(entry));
            },
            other => other,
        };

        self.metrics.record_miss();
        let response = self.fetch(url).await?;

        if let Some(source) = params.pattern() {
            let pattern = BodyPattern::compile(source).map_err(ProxyError::Pattern)?;

            if !pattern.is_match(&response.body) {
                let outcome = match cached {
                    Some(entry) => ProxyOutcome::StaleFallback(entry),
                    None => ProxyOutcome::Unvalidated(response.body),
                };
                info!(
                    pattern = pattern.as_str(),
                    outcome = outcome.kind(),
                    "Fetched body rejected by pattern"
                );
                self.metrics.record_fallback(outcome.kind());
                return Ok(outcome);
            }
        }

        let entry = self
            .policy
            .capture(response.headers, response.body, self.clock.now_millis());
        self.write(url, &entry, ttl).await?;

        Ok(ProxyOutcome::Fetched(entry))
    }

    async fn lookup(&self, url: &str) -> Result<Option<CacheEntry>, ProxyError> {
        match self.store.get(url).await? {
            Some(raw) => CacheEntry::from_json(&raw)
                .map(Some)
                .map_err(ProxyError::Entry),
            None => Ok(None),
        }
    }

    async fn fetch(&self, url: &str) -> Result<OriginResponse, ProxyError> {
        let start = Instant::now();
        let response = self.origin.fetch(url).await?;
        self.metrics.record_origin_fetch(start.elapsed());

        if !response.is_success() {
            warn!(status = response.status, "Origin returned a non-success status");
        }

        Ok(response)
    }

    async fn write(&self, url: &str, entry: &CacheEntry, ttl: i64) -> Result<(), ProxyError> {
        let value = entry.to_json().map_err(ProxyError::Entry)?;
        let expiration_ttl = self.policy.store_ttl(ttl);

        self.store
            .put(url, value, PutOptions::new(expiration_ttl))
            .await?;
        self.metrics.record_store_write();

        debug!(expiration_ttl, "Entry stored");
        Ok(())
    }
}

impl std::fmt::Debug for EdgeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeCache")
            .field("store", &self.store.name())
            .field("origin", &self.origin.name())
            .field("policy", &self.policy)
            .finish()
    }
}
