//! Metrics collection and exposition.
//!
//! # Metrics
//! - `handler_resolutions_total` (counter): activations by outcome
//! - `handler_resolution_duration_seconds` (histogram): resolve latency
//! - `handler_renders_total` (counter): page renders by populated panels

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint. Must run inside the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter")
        }
    }
}

/// `outcome` is `"resolved"` or a [`ProtocolError::kind`](crate::protocol::ProtocolError::kind).
pub fn record_resolution(outcome: &'static str, start: Instant) {
    metrics::counter!("handler_resolutions_total", "outcome" => outcome).increment(1);
    metrics::histogram!("handler_resolution_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

pub fn record_render(url_panel: bool, data_panel: bool) {
    metrics::counter!(
        "handler_renders_total",
        "url_panel" => label(url_panel),
        "data_panel" => label(data_panel)
    )
    .increment(1);
}

fn label(present: bool) -> &'static str {
    if present {
        "present"
    } else {
        "absent"
    }
}
