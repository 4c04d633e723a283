//! Middleware that generates or propagates X-Request-Id.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request, Response},
};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Longest incoming request ID that is propagated as-is.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Layer that adds request ID to requests and responses.
#[derive(Clone, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdMiddleware { inner }
    }
}

/// Middleware that ensures every request has a unique ID.
///
/// An incoming `x-request-id` is kept when it is non-empty, at most
/// [`MAX_REQUEST_ID_LEN`] bytes and visible ASCII; otherwise a UUID v4 is
/// generated and replaces it.
#[derive(Clone)]
pub struct RequestIdMiddleware<S> {
    inner: S,
}

fn incoming_id(request: &Request<Body>) -> Option<HeaderValue> {
    let value = request.headers().get(&REQUEST_ID_HEADER)?;
    let bytes = value.as_bytes();

    let acceptable = !bytes.is_empty()
        && bytes.len() <= MAX_REQUEST_ID_LEN
        && bytes.iter().all(|b| b.is_ascii_graphic());

    acceptable.then(|| value.clone())
}

impl<S> Service<Request<Body>> for RequestIdMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let request_id = incoming_id(&request).unwrap_or_else(|| {
            // A hyphenated UUID is always a valid header value
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        });

        request
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), request_id.clone());

        let mut inner = self.inner.clone();

        Box::pin(async move {
            let mut response = inner.call(request).await?;

            response
                .headers_mut()
                .insert(REQUEST_ID_HEADER.clone(), request_id);

            Ok(response)
        })
    }
}

// Service-level tests live in tests/middleware_test.rs.
