//! Metrics setup and initialization.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;

use super::cache::register_cache_metrics;
use super::http::register_http_metrics;

/// Histogram buckets (seconds).
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, // 100 microsegundos
    0.0005, // 500 microsegundos
    0.001,  // 1 milisegundo
    0.0025, // 2.5 milisegundos
    0.005,  // 5 milisegundos
    0.01,   // 10 milisegundos
    0.025,  // 25 milisegundos
    0.05,   // 50 milisegundos
    0.1,    // 100 milisegundos
    0.25,   // 250 milisegundos
    0.5,    // 500 milisegundos
    1.0,    // 1 segundo
    2.5,    // 2.5 segundos
    5.0,    // 5 segundos
    10.0,   // 10 segundos
];

/// Installs the recorder and returns the handle for the metrics endpoint.
///
/// Installs the global recorder, so this can only succeed once per process.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets(LATENCY_BUCKETS)?
        .install_recorder()?;

    register_cache_metrics();
    register_http_metrics();

    info!("Metrics system initialized");
    Ok(handle)
}

/// Builds a handle without installing a global recorder.
///
/// Rendering it yields an empty exposition; used where a handle is required
/// but nothing is recorded, such as router tests.
pub fn detached_handle() -> Result<PrometheusHandle, BuildError> {
    Ok(PrometheusBuilder::new()
        .set_buckets(LATENCY_BUCKETS)?
        .build_recorder()
        .handle())
}
