//! Terminal states of a proxy request.

use edgecache_core::CacheEntry;

/// How a proxy request was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyOutcome {
    /// The stored entry was fresh; origin was not contacted.
    Fresh(CacheEntry),

    /// The fetched body failed the `regex` check and the previous entry,
    /// fresh or not, was served instead. The store was not touched.
    StaleFallback(CacheEntry),

    /// The fetched body failed the `regex` check and there was nothing to
    /// fall back on. The body is served as-is and not stored.
    Unvalidated(String),

    /// The fetched body was accepted and written through to the store.
    Fetched(CacheEntry),
}

impl ProxyOutcome {
    /// Stable label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fresh(_) => "hit",
            Self::StaleFallback(_) => "stale_fallback",
            Self::Unvalidated(_) => "unvalidated",
            Self::Fetched(_) => "miss",
        }
    }

    /// Body that will be sent to the client.
    pub fn body(&self) -> &str {
        match self {
            Self::Fresh(entry) | Self::StaleFallback(entry) | Self::Fetched(entry) => &entry.body,
            Self::Unvalidated(body) => body,
        }
    }

    /// Returns true if the response replays stored origin headers.
    pub fn replays_headers(&self) -> bool {
        matches!(self, Self::Fresh(_) | Self::StaleFallback(_))
    }
}
