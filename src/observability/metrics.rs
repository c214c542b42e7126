//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sketch_wallet_connects_total` (counter): connect attempts by outcome
//! - `sketch_mints_total` (counter): mint attempts by outcome
//! - `sketch_mint_duration_seconds` (histogram): estimate → confirmation latency
//! - `sketch_pointer_events_total` (counter): pointer events applied to the canvas
//!
//! Without an installed recorder every call is a no-op.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_connect(outcome: &'static str) {
    counter!("sketch_wallet_connects_total", "outcome" => outcome).increment(1);
}

pub fn record_mint(outcome: &'static str, start: Instant) {
    counter!("sketch_mints_total", "outcome" => outcome).increment(1);
    histogram!("sketch_mint_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_pointer_event(kind: &'static str) {
    counter!("sketch_pointer_events_total", "kind" => kind).increment(1);
}
