//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ssr_requests_total` (counter): page requests by route, status
//! - `ssr_render_duration_seconds` (histogram): end-to-end render latency
//! - `ssr_upstream_fetches_total` (counter): upstream fetches by outcome
//! - `ssr_upstream_fetch_duration_seconds` (histogram): upstream latency
//!
//! Recording is a no-op until a recorder is installed, so tests and the
//! default configuration pay nothing for it.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished page request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    let labels = [
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("ssr_requests_total", &labels).increment(1);
    metrics::histogram!("ssr_render_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record an upstream fetch attempt.
pub fn record_upstream_fetch(outcome: &'static str, start: Instant) {
    metrics::counter!("ssr_upstream_fetches_total", "outcome" => outcome).increment(1);
    metrics::histogram!("ssr_upstream_fetch_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
