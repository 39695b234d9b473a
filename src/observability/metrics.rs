//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_route_decisions_total` (counter): decisions by kind
//!   (`pass`, `rewrite`, `delegate`)
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic increments)
//! - The exporter runs on its own address, gated by config, so the scrape
//!   endpoint never competes with application traffic

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::policy::RouteDecision;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one route decision.
pub fn record_decision(decision: &RouteDecision) {
    counter!("gateway_route_decisions_total", "decision" => decision.label()).increment(1);
}
