use edgecache_core::{CacheEntry, CachePolicy, FreshnessMode};

mod common;

#[test]
fn test_entry_roundtrip_preserves_body_and_headers() {
    let original = common::entry("<html><body>hello</body></html>", Some(1_700_000_000_000));

    let json = original.to_json().unwrap();
    let decoded = CacheEntry::from_json(&json).unwrap();

    assert_eq!(decoded.body, original.body);
    assert_eq!(decoded.headers, original.headers);
    assert_eq!(decoded.timestamp, original.timestamp);
}

#[test]
fn test_special_characters_preservation() {
    let body = "line1\nline2\t\"quoted\" \\ back Ñandú 🐍 \u{0000}";
    let original = common::entry(body, None);

    let decoded = CacheEntry::from_json(&original.to_json().unwrap()).unwrap();

    assert_eq!(decoded.body, body);
}

#[test]
fn test_captured_headers_exclude_framing() {
    let headers = common::html_headers();

    assert!(headers.contains_key("content-type"));
    assert!(headers.contains_key("etag"));
    assert!(!headers.contains_key("content-length"));
    assert!(!headers.contains_key("connection"));
}

#[test]
fn test_entry_written_by_expiration_only_mode_reads_back_untimed() {
    let policy = CachePolicy::new(FreshnessMode::ExpirationOnly);
    let written = policy.capture(common::html_headers(), "body", 1_000);

    let decoded = CacheEntry::from_json(&written.to_json().unwrap()).unwrap();

    assert_eq!(decoded.timestamp, None);
    // An entry without a timestamp is never fresh in timestamp mode
    assert!(!CachePolicy::new(FreshnessMode::Timestamp).is_fresh(&decoded, 3_600, 1_000));
}
