//! Error types for the edgecache domain.
//!
//! Core errors are never recovered from inside the proxy: a cached value
//! that cannot be decoded or a pattern that cannot be compiled aborts the
//! request. The server maps them to a generic failure response.

use thiserror::Error;

/// Convenience result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced by the domain types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The `regex` parameter is not a valid pattern.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern source as supplied by the caller
        pattern: String,
        /// Compilation failure
        #[source]
        source: regress::Error,
    },

    /// A stored value could not be decoded as a cache entry.
    #[error("failed to decode cache entry: {0}")]
    EntryDecode(#[source] serde_json::Error),

    /// A cache entry could not be encoded for storage.
    #[error("failed to encode cache entry: {0}")]
    EntryEncode(#[source] serde_json::Error),
}

impl CoreError {
    /// Creates an InvalidPattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regress::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
