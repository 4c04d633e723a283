//! HTTP origin implementation.

use async_trait::async_trait;
use edgecache_core::capture_headers;
use tracing::{debug, instrument};

use super::config::HttpOriginConfig;
use super::traits::{Origin, OriginResponse};
use crate::error::OriginError;

/// Origin fetched over HTTP(S) with a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpOrigin {
    client: reqwest::Client,
}

impl HttpOrigin {
    /// Creates a new HTTP origin.
    ///
    /// # Errors
    ///
    /// Returns `OriginError::Client` if the TLS backend or client cannot be
    /// initialised.
    pub fn new(config: HttpOriginConfig) -> Result<Self, OriginError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent());

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder.build().map_err(OriginError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Origin for HttpOrigin {
    #[instrument(skip(self), level = "debug")]
    async fn fetch(&self, url: &str) -> Result<OriginResponse, OriginError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_builder() {
                OriginError::InvalidUrl {
                    url: url.to_string(),
                    source: e,
                }
            } else {
                OriginError::Transport {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        let status = response.status().as_u16();
        let headers = capture_headers(
            response
                .headers()
                .iter()
                .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v))),
        );

        let body = response.text().await.map_err(|e| OriginError::Body {
            url: url.to_string(),
            source: e,
        })?;

        debug!(status, bytes = body.len(), "Origin response read");

        Ok(OriginResponse {
            status,
            headers,
            body,
        })
    }

    fn name(&self) -> &str {
        "http"
    }
}
