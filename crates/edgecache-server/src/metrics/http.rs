//! HTTP metrics middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use std::time::Instant;

/// Middleware that records HTTP metrics for every request.
///
/// Every path on the proxy listener is the same endpoint, so the path is not
/// used as a label.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let duration = start.elapsed();

    counter!(
        "edgecache_http_requests_total",
        "method" => method.clone(),
        "status" => status
    )
    .increment(1);

    histogram!(
        "edgecache_http_request_duration_seconds",
        "method" => method
    )
    .record(duration.as_secs_f64());

    response
}

/// Describes the HTTP metrics
pub fn register_http_metrics() {
    metrics::describe_counter!(
        "edgecache_http_requests_total",
        "Total number of HTTP requests"
    );
    metrics::describe_histogram!(
        "edgecache_http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
}
