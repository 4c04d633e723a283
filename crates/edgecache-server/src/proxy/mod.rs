//! Edge cache proxy engine.
//!
//! [`EdgeCache`] decides, for one set of [`ProxyParams`](edgecache_core::ProxyParams),
//! whether the stored copy can be served or origin must be fetched, and
//! whether the fetched body may replace the stored copy. The HTTP layer
//! only translates the resulting [`ProxyOutcome`] or [`ProxyError`].

mod engine;
mod error;
mod outcome;

pub use engine::EdgeCache;
pub use error::ProxyError;
pub use outcome::ProxyOutcome;
