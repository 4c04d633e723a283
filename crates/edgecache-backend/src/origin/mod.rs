//! Origin fetch abstraction.
//!
//! This module defines the trait used to fetch the target URL and the
//! HTTP implementation built on `reqwest`.

mod config;
mod http;
mod traits;

pub use config::{HttpOriginConfig, HttpOriginConfigBuilder};
pub use http::HttpOrigin;
pub use traits::{Origin, OriginResponse};
