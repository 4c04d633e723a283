//! edgecache Core - Domain types for the pass-through cache
//!
//! This crate provides the foundational types shared by the backend and
//! server crates:
//!
//! - [`CacheEntry`]: the persisted snapshot of an origin response
//! - [`ProxyParams`]: the parsed `url` / `regex` / `ttl` query parameters
//! - [`CachePolicy`]: freshness decisions and store-level TTL floor
//! - [`BodyPattern`]: body validation against a user supplied regex
//! - [`Clock`]: injectable wall clock in milliseconds
//!
//! Nothing in this crate performs I/O.
//!
//! # Example
//!
//! ```
//! use edgecache_core::{CacheEntry, CachePolicy, FreshnessMode, HeaderSnapshot};
//!
//! let policy = CachePolicy::new(FreshnessMode::Timestamp);
//! let entry = CacheEntry::new(HeaderSnapshot::new(), "hello", Some(1_000));
//!
//! // Captured 5 seconds ago, requested freshness window of 10 seconds.
//! assert!(policy.is_fresh(&entry, 10, 6_000));
//! assert_eq!(policy.store_ttl(5), 60);
//! ```

pub mod clock;
pub mod entry;
pub mod error;
pub mod headers;
pub mod params;
pub mod pattern;
pub mod policy;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use error::{CoreError, Result};
pub use headers::{HeaderSnapshot, capture_headers, is_replayable};
pub use params::{ProxyParams, parse_ttl};
pub use pattern::BodyPattern;
pub use policy::{CachePolicy, FreshnessMode, MIN_STORE_TTL_SECS};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
