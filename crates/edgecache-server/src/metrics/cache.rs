//! Cache metrics recording.

use metrics::{counter, histogram};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Describes the cache metrics.
/// Call once at startup.
pub fn register_cache_metrics() {
    metrics::describe_counter!("edgecache_cache_hits_total", "Requests served from a fresh entry");
    metrics::describe_counter!(
        "edgecache_cache_misses_total",
        "Requests that went to origin"
    );
    metrics::describe_counter!(
        "edgecache_cache_fallbacks_total",
        "Fetched bodies rejected by the regex parameter"
    );
    metrics::describe_counter!("edgecache_store_writes_total", "Entries written to the store");
    metrics::describe_histogram!(
        "edgecache_origin_fetch_seconds",
        "Time spent fetching and reading origin responses"
    );
}

/// Cache metrics recorder.
/// Keeps internal atomic counters for the hit rate.
#[derive(Debug, Clone)]
pub struct CacheMetrics {
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self {
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records a cache hit
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        counter!("edgecache_cache_hits_total").increment(1);
    }

    /// Records a cache miss
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        counter!("edgecache_cache_misses_total").increment(1);
    }

    /// Records a response served unvalidated or from a stale entry.
    pub fn record_fallback(&self, kind: &'static str) {
        counter!("edgecache_cache_fallbacks_total", "kind" => kind).increment(1);
    }

    /// Records a store write
    pub fn record_store_write(&self) {
        counter!("edgecache_store_writes_total").increment(1);
    }

    /// Records the duration of an origin fetch
    pub fn record_origin_fetch(&self, duration: Duration) {
        histogram!("edgecache_origin_fetch_seconds").record(duration.as_secs_f64());
    }

    /// Hit rate over the process lifetime, used in request logs
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed) as f64;
        let misses = self.misses.load(Ordering::Relaxed) as f64;
        let total = hits + misses;
        if total == 0.0 { 0.0 } else { hits / total }
    }

    /// Number of hits
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of misses
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for CacheMetrics {
    fn default() -> Self {
        Self::new()
    }
}
