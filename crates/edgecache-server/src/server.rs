use std::future::IntoFuture;
use std::net::SocketAddr;

use axum::{Router, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tracing::{error, info};

use crate::handlers::{health::health_check, metrics::metrics_handler, proxy::proxy_handler};
use crate::metrics::http::http_metrics_middleware;
use crate::middleware::{LoggingLayer, RequestIdLayer};
use crate::state::AppState;

/// Creates the proxy router: every path and method goes to the proxy handler.
pub fn create_router_with_state(state: AppState) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer::new("proxy"));

    Router::new()
        .fallback(proxy_handler)
        .with_state(state)
        // HTTP metrics middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware_stack)
}

/// Creates the admin router with health and metrics endpoints.
pub fn create_admin_router(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer::new("admin"));

    // Router for metrics endpoint (different state)
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    let health_router = Router::new()
        .route("/health", get(health_check))
        .with_state(state);

    Router::new()
        .merge(health_router)
        .merge(metrics_router)
        .layer(middleware_stack)
}

/// Runs the proxy listener, and the admin listener when `admin_addr` is set,
/// until a shutdown signal arrives.
pub async fn run_server_with_state(
    proxy_addr: SocketAddr,
    admin_addr: Option<SocketAddr>,
    state: AppState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let proxy_app = create_router_with_state(state.clone());

    let proxy_listener = tokio::net::TcpListener::bind(proxy_addr).await?;
    info!("Proxy listening on {}", proxy_addr);

    let proxy_server = axum::serve(proxy_listener, proxy_app)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    let Some(admin_addr) = admin_addr else {
        info!("Admin listener disabled");
        return proxy_server.await;
    };

    let admin_app = create_admin_router(state, prometheus_handle);

    let admin_listener = tokio::net::TcpListener::bind(admin_addr).await?;
    info!("Admin listening on {}", admin_addr);

    let admin_server = axum::serve(admin_listener, admin_app)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    tokio::try_join!(proxy_server, admin_server)?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
