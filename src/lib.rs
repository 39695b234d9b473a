//! Locale Routing Gateway Library
//!
//! Per-request locale routing in front of a web application: a development
//! fast path that rewrites page paths under one fixed locale, and a
//! production path that delegates every request to an injected locale
//! negotiator. Embed [`http::locale::LocaleRouting`] with
//! `axum::middleware::from_fn_with_state` around your own router, or run
//! [`GatewayServer`] as-is.

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::schema::{GatewayConfig, RoutingMode};
pub use http::locale::{locale_routing, LocaleRouting};
pub use http::negotiate::LocaleNegotiator;
pub use http::server::GatewayServer;
pub use routing::policy::{RouteDecision, RoutePolicy};
