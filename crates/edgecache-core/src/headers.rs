//! Origin header capture.
//!
//! The replayed body is re-framed by the server, so headers describing the
//! original framing or the original connection are dropped at capture time.
//! What is stored is exactly what is replayed on a cache reply.

use std::collections::BTreeMap;

/// Captured origin headers, keyed by lowercase header name.
pub type HeaderSnapshot = BTreeMap<String, String>;

/// Headers that are never stored.
const NON_REPLAYABLE: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "content-length",
    "content-encoding",
];

/// Returns true if a header with this name may be replayed from cache.
///
/// # Example
///
/// ```
/// use edgecache_core::is_replayable;
///
/// assert!(is_replayable("Content-Type"));
/// assert!(!is_replayable("Transfer-Encoding"));
/// ```
pub fn is_replayable(name: &str) -> bool {
    !NON_REPLAYABLE
        .iter()
        .any(|blocked| blocked.eq_ignore_ascii_case(name))
}

/// Builds a [`HeaderSnapshot`] from `(name, value)` pairs.
///
/// Names are lowercased, repeated headers are joined with `", "` in the
/// order they were received.
///
/// # Example
///
/// ```
/// use edgecache_core::capture_headers;
///
/// let headers = capture_headers([
///     ("Content-Type", "text/html"),
///     ("Vary", "Accept"),
///     ("vary", "Origin"),
///     ("Content-Length", "42"),
/// ]);
///
/// assert_eq!(headers.get("content-type").map(String::as_str), Some("text/html"));
/// assert_eq!(headers.get("vary").map(String::as_str), Some("Accept, Origin"));
/// assert!(!headers.contains_key("content-length"));
/// ```
pub fn capture_headers<I, N, V>(pairs: I) -> HeaderSnapshot
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut snapshot = HeaderSnapshot::new();

    for (name, value) in pairs {
        let name = name.as_ref();
        if !is_replayable(name) {
            continue;
        }

        snapshot
            .entry(name.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value.as_ref());
            })
            .or_insert_with(|| value.as_ref().to_string());
    }

    snapshot
}
