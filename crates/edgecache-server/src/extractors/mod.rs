//! Request extractors.

pub mod query;

pub use query::ProxyQuery;
