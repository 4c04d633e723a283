//! Proxy engine errors.

use edgecache_backend::{OriginError, StoreError};
use edgecache_core::CoreError;

/// Fatal errors of a proxy request. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The key-value store failed on get or put.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A stored entry could not be decoded, or a new one encoded.
    #[error("cache entry error: {0}")]
    Entry(#[source] CoreError),

    /// The `regex` parameter does not compile.
    #[error("{0}")]
    Pattern(#[source] CoreError),

    /// Fetching or reading the origin response failed.
    #[error("origin error: {0}")]
    Origin(#[from] OriginError),
}

impl ProxyError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Store(_) => "store",
            Self::Entry(_) => "entry",
            Self::Pattern(_) => "pattern",
            Self::Origin(_) => "origin",
        }
    }

    /// Returns true if the same request could succeed later without any
    /// change on the caller's side. Used to pick the log level.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Origin(e) => e.is_transient(),
            Self::Store(StoreError::Unavailable { .. }) => true,
            Self::Store(StoreError::Backend { .. }) | Self::Entry(_) | Self::Pattern(_) => false,
        }
    }
}
