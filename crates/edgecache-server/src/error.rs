use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::proxy::ProxyError;

/// Body of a missing `url` response.
pub const MISSING_URL_MESSAGE: &str = "Missing url param";

#[derive(Debug)]
pub enum AppError {
    /// The url parameter is missing
    MissingUrl,

    /// Invalid parameters
    BadRequest(String),

    /// Internal error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<ProxyError> for AppError {
    fn from(err: ProxyError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            // Plain text, as existing callers expect
            AppError::MissingUrl => {
                return (StatusCode::BAD_REQUEST, MISSING_URL_MESSAGE).into_response();
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                msg,
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
