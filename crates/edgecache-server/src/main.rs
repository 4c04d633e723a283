//! Edgecache server binary.

use std::sync::Arc;

use anyhow::Context;
use edgecache_backend::{HttpOrigin, MemoryKvStore};
use edgecache_server::{AppState, EdgeCache, Settings, metrics::init_metrics, run_server_with_state};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("failed to load configuration")?;

    tracing::info!("Starting edgecache v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Freshness mode: {:?}", settings.cache.freshness);
    tracing::info!("Store capacity: {}", settings.cache.max_capacity);

    let prometheus_handle = init_metrics().context("failed to initialize metrics")?;

    let store = Arc::new(MemoryKvStore::new(settings.cache.max_capacity));
    let origin = Arc::new(
        HttpOrigin::new(settings.origin_config()).context("failed to build origin client")?,
    );

    let cache = EdgeCache::new(store, origin, settings.policy());
    let state = AppState::new(cache);

    let proxy_addr = settings.proxy_addr().context("invalid proxy address")?;
    let admin_addr = settings.admin_addr().context("invalid admin address")?;

    run_server_with_state(proxy_addr, admin_addr, state, prometheus_handle).await?;

    Ok(())
}
