#![allow(dead_code)]
use edgecache_core::{CacheEntry, HeaderSnapshot, capture_headers};

/// Headers a typical HTML origin sends back.
pub fn html_headers() -> HeaderSnapshot {
    capture_headers([
        ("Content-Type", "text/html; charset=utf-8"),
        ("ETag", "\"5f3c-1a\""),
        ("Vary", "Accept-Encoding"),
        ("Content-Length", "1234"),
        ("Connection", "keep-alive"),
    ])
}

/// Entry captured at `timestamp` with the given body.
pub fn entry(body: &str, timestamp: Option<i64>) -> CacheEntry {
    CacheEntry::new(html_headers(), body, timestamp)
}
