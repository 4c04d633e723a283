//! Test helpers for edgecache-server.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod mocks;

pub use client::{TestClient, TestResponse, proxy_uri};
pub use mocks::{Harness, RecordingStore, StubOrigin};
