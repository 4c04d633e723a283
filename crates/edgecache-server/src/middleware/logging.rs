//! Structured request logging.

use std::{
    pin::Pin,
    task::{Context, Poll},
    time::{Duration, Instant},
};

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
};
use tower::{Layer, Service};
use tracing::{Instrument, Span, info, info_span, warn};

use super::request_id::REQUEST_ID_HEADER;

/// Layer that wraps each request in an `http_request` span tagged with the
/// listener it arrived on.
#[derive(Clone, Copy, Debug)]
pub struct LoggingLayer {
    listener: &'static str,
}

impl LoggingLayer {
    /// Creates a layer for the named listener (`proxy`, `admin`).
    pub fn new(listener: &'static str) -> Self {
        Self { listener }
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddleware {
            inner,
            listener: self.listener,
        }
    }
}

/// Middleware produced by [`LoggingLayer`].
#[derive(Clone, Debug)]
pub struct LoggingMiddleware<S> {
    inner: S,
    listener: &'static str,
}

fn request_span(listener: &'static str, request: &Request<Body>) -> Span {
    // Set by RequestIdMiddleware, which runs first
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    info_span!(
        "http_request",
        listener,
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn log_completion(status: StatusCode, elapsed: Duration) {
    let duration_ms = elapsed.as_millis() as u64;

    if status.is_server_error() {
        warn!(status = status.as_u16(), duration_ms, "Request failed");
    } else {
        info!(status = status.as_u16(), duration_ms, "Request completed");
    }
}

impl<S> Service<Request<Body>> for LoggingMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let span = request_span(self.listener, &request);
        let start = Instant::now();
        let mut inner = self.inner.clone();

        Box::pin(
            async move {
                info!("Request started");
                let response = inner.call(request).await?;
                log_completion(response.status(), start.elapsed());
                Ok(response)
            }
            .instrument(span),
        )
    }
}
