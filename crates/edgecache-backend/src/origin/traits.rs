//! Origin trait definition.

use async_trait::async_trait;
use edgecache_core::HeaderSnapshot;

use crate::error::OriginError;

/// A fetched origin response, fully buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginResponse {
    /// HTTP status code.
    pub status: u16,
    /// Replayable response headers.
    pub headers: HeaderSnapshot,
    /// Response body decoded as text.
    pub body: String,
}

impl OriginResponse {
    /// Creates a `200` response with no headers.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: HeaderSnapshot::new(),
            body: body.into(),
        }
    }

    /// Adds a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Returns true if the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches the resource behind a target URL.
///
/// Implementations do not retry and do not inspect the status code: any
/// response that could be read counts as a successful fetch.
#[async_trait]
pub trait Origin: Send + Sync {
    /// Fetches `url` and reads the whole body as text.
    ///
    /// # Errors
    ///
    /// - `OriginError::InvalidUrl` if `url` cannot be requested
    /// - `OriginError::Transport` if the request fails
    /// - `OriginError::Body` if the body cannot be read
    async fn fetch(&self, url: &str) -> Result<OriginResponse, OriginError>;

    /// Returns the name of this origin implementation.
    fn name(&self) -> &str {
        "origin"
    }
}
