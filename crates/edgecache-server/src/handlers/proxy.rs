//! Proxy handler, mounted as the fallback of the proxy listener.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};

use crate::error::AppError;
use crate::extractors::ProxyQuery;
use crate::state::AppState;

/// Handler for every path and method of the proxy listener.
///
/// Transient failures (unreachable origin or store) are logged at `warn`,
/// everything else at `error`.
#[instrument(skip_all, fields(url = %params.url()))]
pub async fn proxy_handler(
    State(state): State<AppState>,
    ProxyQuery(params): ProxyQuery,
) -> Result<Response, AppError> {
    info!(ttl = ?params.ttl(), pattern = ?params.pattern(), "Proxying request");

    let cache = state.cache();
    let outcome = cache.handle(&params).await.map_err(|e| {
        if e.is_transient() {
            warn!(kind = e.kind(), error = %e, "Proxy request failed");
        } else {
            error!(kind = e.kind(), error = %e, "Proxy request failed");
        }
        AppError::from(e)
    })?;

    info!(
        outcome = outcome.kind(),
        hit_rate = cache.metrics().hit_rate(),
        "Proxy request served"
    );
    Ok(outcome.into_response())
}
