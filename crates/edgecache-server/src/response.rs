//! Conversion of proxy outcomes into HTTP responses.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};
use edgecache_core::HeaderSnapshot;
use tracing::debug;

use crate::proxy::ProxyOutcome;

/// Value forced on every proxy response.
pub const CACHE_CONTROL_VALUE: &str = "max-age=0";

impl IntoResponse for ProxyOutcome {
    fn into_response(self) -> Response {
        let replays_headers = self.replays_headers();

        match self {
            ProxyOutcome::Fresh(entry)
            | ProxyOutcome::StaleFallback(entry)
            | ProxyOutcome::Fetched(entry) => {
                if replays_headers {
                    replay(&entry.headers, entry.body)
                } else {
                    plain(entry.body)
                }
            },
            ProxyOutcome::Unvalidated(body) => plain(body),
        }
    }
}

/// Body with only the forced `cache-control` header.
fn plain(body: String) -> Response {
    let mut response = Response::new(Body::from(body));
    force_cache_control(&mut response);
    response
}

/// Body with the stored origin headers, then the forced `cache-control`.
fn replay(headers: &HeaderSnapshot, body: String) -> Response {
    let mut response = Response::new(Body::from(body));

    for (name, value) in headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            },
            _ => debug!(header = %name, "Skipping stored header that is not valid HTTP"),
        }
    }

    force_cache_control(&mut response);
    response
}

fn force_cache_control(response: &mut Response) {
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_VALUE),
    );
}
