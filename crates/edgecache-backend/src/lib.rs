//! # edgecache Backend
//!
//! External collaborators of the pass-through cache, each behind a trait so
//! the proxy can be exercised in isolation:
//!
//! - [`KvStore`]: string key-value store with store-level expiration.
//!   [`MemoryKvStore`] implements it in-process on top of Moka.
//! - [`Origin`]: outbound fetch of the target URL. [`HttpOrigin`] implements
//!   it with a shared `reqwest` client.
//!
//! ## Example
//!
//! ```no_run
//! use edgecache_backend::{HttpOrigin, HttpOriginConfig, KvStore, MemoryKvStore, Origin, PutOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryKvStore::new(10_000);
//! let origin = HttpOrigin::new(HttpOriginConfig::default())?;
//!
//! let response = origin.fetch("https://example.com/").await?;
//! store
//!     .put("https://example.com/", response.body, PutOptions::new(60))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod kv;
pub mod origin;

// Re-exports
pub use error::{OriginError, StoreError};
pub use kv::{KvStore, MemoryKvStore, PutOptions};
pub use origin::{HttpOrigin, HttpOriginConfig, Origin, OriginResponse};

// Re-export edgecache_core for consumers
pub use edgecache_core;
