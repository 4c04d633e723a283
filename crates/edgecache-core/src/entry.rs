//! Persisted cache entry.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::headers::HeaderSnapshot;

/// Snapshot of an origin response as stored in the key-value store.
///
/// The store key is the target URL, so the URL itself is not part of the
/// stored value. `timestamp` is the capture time in milliseconds since the
/// Unix epoch; it is omitted by the expiration-only mode.
///
/// # Example
///
/// ```
/// use edgecache_core::{CacheEntry, HeaderSnapshot};
///
/// let mut headers = HeaderSnapshot::new();
/// headers.insert("content-type".into(), "text/plain".into());
///
/// let entry = CacheEntry::new(headers, "hello", Some(1_700_000_000_000));
/// let json = entry.to_json().unwrap();
///
/// let decoded = CacheEntry::from_json(&json).unwrap();
/// assert_eq!(decoded, entry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Captured origin headers.
    #[serde(default)]
    pub headers: HeaderSnapshot,

    /// Full response body text.
    pub body: String,

    /// Capture time in milliseconds since epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl CacheEntry {
    /// Creates a new entry.
    pub fn new(headers: HeaderSnapshot, body: impl Into<String>, timestamp: Option<i64>) -> Self {
        Self {
            headers,
            body: body.into(),
            timestamp,
        }
    }

    /// Decodes an entry from its stored JSON representation.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(CoreError::EntryDecode)
    }

    /// Encodes the entry for storage.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CoreError::EntryEncode)
    }

    /// Age of the entry in milliseconds at `now_ms`, if it carries a timestamp.
    ///
    /// Negative when the timestamp lies in the future of `now_ms`.
    pub fn age_millis(&self, now_ms: i64) -> Option<i64> {
        self.timestamp.map(|ts| now_ms.saturating_sub(ts))
    }
}
