//! Store and origin doubles.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use edgecache_backend::{KvStore, Origin, OriginError, OriginResponse, PutOptions, StoreError};
use edgecache_core::{CacheEntry, CachePolicy, FreshnessMode, ManualClock};
use edgecache_server::{AppState, EdgeCache, create_router_with_state};

use super::client::TestClient;

/// A recorded `put` call.
#[derive(Debug, Clone)]
pub struct PutCall {
    pub key: String,
    pub value: String,
    pub expiration_ttl: u64,
}

/// In-memory store that records every call.
#[derive(Debug, Default)]
pub struct RecordingStore {
    values: Mutex<HashMap<String, String>>,
    puts: Mutex<Vec<PutCall>>,
    gets: AtomicUsize,
    fail: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Seeds a raw value without recording a put.
    pub fn seed_raw(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Seeds an entry without recording a put.
    pub fn seed(&self, key: &str, entry: &CacheEntry) {
        self.seed_raw(key, &entry.to_json().unwrap());
    }

    /// Decoded entry currently stored under `key`.
    pub fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.values
            .lock()
            .unwrap()
            .get(key)
            .map(|raw| CacheEntry::from_json(raw).unwrap())
    }

    pub fn puts(&self) -> Vec<PutCall> {
        self.puts.lock().unwrap().clone()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KvStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::unavailable("recording store set to fail"));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: String, options: PutOptions) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::backend(key, "recording store set to fail"));
        }
        self.puts.lock().unwrap().push(PutCall {
            key: key.to_string(),
            value: value.clone(),
            expiration_ttl: options.expiration_ttl,
        });
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::unavailable("recording store set to fail"));
        }
        Ok(())
    }
}

/// Origin that answers every URL with the same response.
#[derive(Debug)]
pub struct StubOrigin {
    response: Option<OriginResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubOrigin {
    pub fn new(response: OriginResponse) -> Self {
        Self {
            response: Some(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Origin answering `200` with `body` and a `content-type` header.
    pub fn body(body: &str) -> Self {
        Self::new(OriginResponse::ok(body).with_header("content-type", "text/plain"))
    }

    /// Origin that always fails.
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Origin for StubOrigin {
    async fn fetch(&self, url: &str) -> Result<OriginResponse, OriginError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.response
            .clone()
            .ok_or_else(|| OriginError::unavailable(url, "stub origin set to fail"))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Wall clock instant used by default in tests.
pub const NOW_MS: i64 = 1_700_000_000_000;

/// Engine wired to doubles, with handles kept for assertions.
pub struct Harness {
    pub store: Arc<RecordingStore>,
    pub origin: Arc<StubOrigin>,
    pub clock: ManualClock,
    pub cache: EdgeCache,
}

impl Harness {
    pub fn new(store: RecordingStore, origin: StubOrigin) -> Self {
        Self::with_mode(store, origin, FreshnessMode::Timestamp)
    }

    pub fn with_mode(store: RecordingStore, origin: StubOrigin, mode: FreshnessMode) -> Self {
        let store = Arc::new(store);
        let origin = Arc::new(origin);
        let clock = ManualClock::new(NOW_MS);

        let cache = EdgeCache::new(store.clone(), origin.clone(), CachePolicy::new(mode))
            .with_clock(Arc::new(clock.clone()));

        Self {
            store,
            origin,
            clock,
            cache,
        }
    }

    /// Turns the harness into an HTTP client over the proxy router.
    pub fn into_client(self) -> (TestClient, Arc<RecordingStore>, Arc<StubOrigin>) {
        let app = create_router_with_state(AppState::new(self.cache));
        (TestClient::new(app), self.store, self.origin)
    }
}
