//! Middleware stack for the HTTP listeners.
//!
//! Tower middleware applied to both listeners:
//! - `RequestIdLayer`: generates or propagates X-Request-Id
//! - `LoggingLayer`: structured request logging

mod logging;
mod request_id;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{MAX_REQUEST_ID_LEN, REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware};
