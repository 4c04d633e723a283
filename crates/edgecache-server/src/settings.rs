//! Server configuration.
//!
//! Settings are layered: an optional TOML file first (path taken from
//! `EDGECACHE_CONFIG`, `edgecache.toml` by default), then environment
//! variables prefixed with `EDGECACHE_` using `__` between sections, for
//! example `EDGECACHE_SERVER__PORT=8080` or
//! `EDGECACHE_CACHE__FRESHNESS=expiration_only`.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use edgecache_backend::HttpOriginConfig;
use edgecache_core::{CachePolicy, FreshnessMode, MIN_STORE_TTL_SECS};
use serde::Deserialize;

/// Environment variable holding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "EDGECACHE_CONFIG";

/// Configuration file used when `EDGECACHE_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "edgecache.toml";

/// Top level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub cache: CacheSettings,
    pub origin: OriginSettings,
}

/// Listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind host for both listeners.
    pub host: String,
    /// Proxy listener port.
    pub port: u16,
    /// Admin listener port (health, metrics). 0 disables it.
    pub admin_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
            admin_port: 9090,
        }
    }
}

/// Cache behaviour settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// How freshness of stored entries is decided.
    pub freshness: FreshnessMode,
    /// Floor for store-level expiration, in seconds.
    pub min_store_ttl_secs: u64,
    /// Maximum number of entries in the in-memory store.
    pub max_capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            freshness: FreshnessMode::default(),
            min_store_ttl_secs: MIN_STORE_TTL_SECS,
            max_capacity: 10_000,
        }
    }
}

/// Outbound fetch settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OriginSettings {
    /// User-Agent override.
    pub user_agent: Option<String>,
    /// Total request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
}

impl Settings {
    /// Loads settings from the configured file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        Self::finish(
            Config::builder().add_source(File::with_name(&path).required(false)),
        )
    }

    /// Loads settings from TOML text, still letting the environment override it.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .add_source(
                Environment::with_prefix("EDGECACHE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Proxy listener address.
    pub fn proxy_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }

    /// Admin listener address, or `None` when disabled.
    pub fn admin_addr(&self) -> Result<Option<SocketAddr>, AddrParseError> {
        if self.server.admin_port == 0 {
            return Ok(None);
        }
        format!("{}:{}", self.server.host, self.server.admin_port)
            .parse()
            .map(Some)
    }

    /// Cache policy derived from the cache section.
    pub fn policy(&self) -> CachePolicy {
        CachePolicy::new(self.cache.freshness).with_min_store_ttl(self.cache.min_store_ttl_secs)
    }

    /// Origin client configuration derived from the origin section.
    pub fn origin_config(&self) -> HttpOriginConfig {
        let mut builder = HttpOriginConfig::builder();

        if let Some(user_agent) = &self.origin.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(secs) = self.origin.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.origin.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }
}
