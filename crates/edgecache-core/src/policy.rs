//! Freshness and store expiration policy.

use serde::{Deserialize, Serialize};

use crate::entry::CacheEntry;
use crate::headers::HeaderSnapshot;

/// Minimum store-level expiration, in seconds.
///
/// Whatever freshness window the caller asks for, the stored copy lives at
/// least this long so that it can still serve as a fallback.
pub const MIN_STORE_TTL_SECS: u64 = 60;

/// How freshness of a stored entry is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessMode {
    /// Entries carry a capture timestamp that is compared against the
    /// requested `ttl` on every read. The default `ttl` is 0, so a request
    /// without `ttl` always revalidates against origin.
    #[default]
    Timestamp,

    /// Freshness is delegated to the store's own expiration: whatever the
    /// store still returns is served. The default `ttl` is 60.
    ExpirationOnly,
}

impl FreshnessMode {
    /// Freshness window used when the request has no usable `ttl`.
    pub fn default_ttl(self) -> i64 {
        match self {
            Self::Timestamp => 0,
            Self::ExpirationOnly => 60,
        }
    }
}

/// Cache policy: freshness check, store TTL and entry capture.
///
/// # Example
///
/// ```
/// use edgecache_core::{CachePolicy, FreshnessMode};
///
/// let policy = CachePolicy::new(FreshnessMode::ExpirationOnly);
/// assert_eq!(policy.effective_ttl(None), 60);
/// assert_eq!(policy.store_ttl(300), 300);
/// assert_eq!(policy.store_ttl(5), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    mode: FreshnessMode,
    min_store_ttl: u64,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(FreshnessMode::default())
    }
}

impl CachePolicy {
    /// Creates a policy with the standard store TTL floor.
    pub fn new(mode: FreshnessMode) -> Self {
        Self {
            mode,
            min_store_ttl: MIN_STORE_TTL_SECS,
        }
    }

    /// Overrides the store TTL floor.
    pub fn with_min_store_ttl(mut self, seconds: u64) -> Self {
        self.min_store_ttl = seconds;
        self
    }

    /// Returns the freshness mode.
    pub fn mode(&self) -> FreshnessMode {
        self.mode
    }

    /// Returns the store TTL floor in seconds.
    pub fn min_store_ttl(&self) -> u64 {
        self.min_store_ttl
    }

    /// Resolves the requested `ttl` against the mode default.
    pub fn effective_ttl(&self, requested: Option<i64>) -> i64 {
        requested.unwrap_or_else(|| self.mode.default_ttl())
    }

    /// Returns true if `entry` may be served without contacting origin.
    ///
    /// In [`FreshnessMode::Timestamp`] the entry is fresh while
    /// `now_ms - timestamp < ttl * 1000`; an entry without timestamp is
    /// never fresh. In [`FreshnessMode::ExpirationOnly`] every entry the
    /// store hands back is fresh.
    pub fn is_fresh(&self, entry: &CacheEntry, ttl: i64, now_ms: i64) -> bool {
        match self.mode {
            FreshnessMode::ExpirationOnly => true,
            FreshnessMode::Timestamp => match entry.age_millis(now_ms) {
                Some(age) => age < ttl.saturating_mul(1000),
                None => false,
            },
        }
    }

    /// Store-level expiration for a write: `max(ttl, floor)` seconds.
    pub fn store_ttl(&self, ttl: i64) -> u64 {
        u64::try_from(ttl)
            .unwrap_or(0)
            .max(self.min_store_ttl)
    }

    /// Builds the entry to persist after a validated fetch.
    ///
    /// The timestamp is only recorded in [`FreshnessMode::Timestamp`].
    pub fn capture(&self, headers: HeaderSnapshot, body: impl Into<String>, now_ms: i64) -> CacheEntry {
        let timestamp = match self.mode {
            FreshnessMode::Timestamp => Some(now_ms),
            FreshnessMode::ExpirationOnly => None,
        };
        CacheEntry::new(headers, body, timestamp)
    }
}
