//! HTTP origin configuration.

use std::time::Duration;

fn default_user_agent() -> String {
    concat!("edgecache/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Configuration for [`HttpOrigin`](crate::HttpOrigin).
///
/// No timeout is set by default: the fetch waits as long as the client and
/// the peer allow.
#[derive(Debug, Clone)]
pub struct HttpOriginConfig {
    user_agent: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl Default for HttpOriginConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl HttpOriginConfig {
    /// Creates a new builder for HttpOriginConfig.
    pub fn builder() -> HttpOriginConfigBuilder {
        HttpOriginConfigBuilder::default()
    }

    /// Returns the User-Agent sent to origins.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the total request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the connect timeout.
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }
}

/// Builder for HttpOriginConfig.
#[derive(Debug, Default)]
pub struct HttpOriginConfigBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl HttpOriginConfigBuilder {
    /// Sets the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> HttpOriginConfig {
        HttpOriginConfig {
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
        }
    }
}
