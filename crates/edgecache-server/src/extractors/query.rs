use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use edgecache_core::ProxyParams;

use crate::error::AppError;

/// Extracts `url`, `regex` and `ttl` from the query string.
///
/// Rejects with [`AppError::MissingUrl`] before any handler code runs, so a
/// request without `url` never reaches the store.
#[derive(Debug)]
pub struct ProxyQuery(pub ProxyParams);

impl<S> FromRequestParts<S> for ProxyQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Pairs keep their order so the first occurrence of a key wins
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        ProxyParams::from_pairs(pairs)
            .map(ProxyQuery)
            .ok_or(AppError::MissingUrl)
    }
}
