use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

impl HealthResponse {
    pub fn up(store: impl Into<String>) -> Self {
        Self {
            status: "UP".to_string(),
            store: store.into(),
        }
    }

    pub fn down(store: impl Into<String>) -> Self {
        Self {
            status: "DOWN".to_string(),
            store: store.into(),
        }
    }
}

/// Handler for GET /health on the admin listener.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let cache = state.cache();

    match cache.store_health().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::up(cache.store_name()))),
        Err(e) => {
            warn!(error = %e, "Store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::down(cache.store_name())),
            )
        },
    }
}
