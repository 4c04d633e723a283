//! Key-value store abstraction.
//!
//! This module defines the store trait used by the proxy and the
//! in-process implementation.

mod memory;
mod traits;

pub use memory::MemoryKvStore;
pub use traits::{KvStore, PutOptions};
