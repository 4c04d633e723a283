//! Application state.

use std::sync::Arc;

use crate::proxy::EdgeCache;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    cache: Arc<EdgeCache>,
}

impl AppState {
    /// Creates a new AppState around the proxy engine.
    pub fn new(cache: EdgeCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Returns the proxy engine.
    pub fn cache(&self) -> &EdgeCache {
        self.cache.as_ref()
    }
}
