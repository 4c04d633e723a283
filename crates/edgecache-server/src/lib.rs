//! Edgecache Server - HTTP pass-through cache.
//!
//! Every request on the proxy listener is answered from a key-value store
//! when the stored copy of the target URL is fresh enough, and fetched from
//! origin (and written through) otherwise. Health and Prometheus metrics
//! live on a separate admin listener.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod proxy;
pub mod response;
pub mod server;
pub mod settings;
pub mod state;

pub use error::AppError;
pub use handlers::health::HealthResponse;
pub use proxy::{EdgeCache, ProxyError, ProxyOutcome};
pub use server::{create_admin_router, create_router_with_state, run_server_with_state};
pub use settings::Settings;
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
