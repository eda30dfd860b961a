//! Prometheus exposition for calculator-service.
//!
//! HTTP-level series come from `service_core::middleware::metrics`; this module
//! adds the calculation counter and renders everything for `/metrics`.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub const CALCULATIONS_TOTAL: &str = "calculations_total";

/// Install the global Prometheus recorder. Must be called once at startup.
pub fn init_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    if METRICS_HANDLE.set(handle).is_err() {
        anyhow::bail!("metrics handle already initialized");
    }

    metrics::describe_counter!(
        CALCULATIONS_TOTAL,
        "Completed calculations by operation and outcome"
    );

    tracing::info!("Prometheus metrics initialized");
    Ok(())
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record one calculation. `outcome` is `ok` or `error`.
pub fn record_calculation(operation: &str, outcome: &'static str) {
    counter!(
        CALCULATIONS_TOTAL,
        "operation" => operation.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
