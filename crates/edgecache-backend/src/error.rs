//! Error types for store and origin backends.

/// Errors returned by a [`KvStore`](crate::KvStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store cannot be reached.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The store rejected or failed the operation.
    #[error("store error on key '{key}': {reason}")]
    Backend { key: String, reason: String },
}

impl StoreError {
    /// Creates a new unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates a new backend error for `key`.
    pub fn backend(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Backend {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by an [`Origin`](crate::Origin).
#[derive(Debug, thiserror::Error)]
pub enum OriginError {
    /// The target is not a URL the client can request.
    #[error("invalid origin url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Connecting to or talking with the origin failed.
    #[error("failed to fetch '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read.
    #[error("failed to read body from '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failure reported by a non-HTTP origin implementation.
    #[error("origin unavailable for '{url}': {reason}")]
    Unavailable { url: String, reason: String },
}

impl OriginError {
    /// Creates a new unavailable error.
    pub fn unavailable(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this is a transient error that might succeed on retry.
    ///
    /// The proxy never retries; this is only used for log levels.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Body { .. } | Self::Unavailable { .. } => true,
            Self::InvalidUrl { .. } | Self::Client(_) => false,
        }
    }
}
