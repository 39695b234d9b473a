//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the demo application handlers
//! - Wire up middleware (tracing, timeout, request ID, locale routing)
//! - Bind the server to a listener and serve until shutdown
//!
//! The middleware stack wraps the router instead of being added with
//! `Router::layer`: layers added there run after routing, which would make
//! the locale rewrite invisible to route matching.
//!
//! The application behind the gateway is an echo-style page tree: it reports
//! the internally routed path and the leading locale segment, which is
//! exactly what an end-to-end test (or a curious operator) needs to see the
//! rewrite and delegation behavior. Real applications embed the middleware
//! from [`crate::http::locale`] around their own router instead.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::Uri,
    middleware,
    routing::{any, get},
    Json, Router, ServiceExt,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::schema::{GatewayConfig, LocaleConfig};
use crate::http::locale::{locale_routing, BuildError, LocaleRouting};
use crate::http::negotiate::LocaleNegotiator;
use crate::http::request_id::{propagate_request_id_layer, set_request_id_layer};

/// HTTP server for the locale gateway.
pub struct GatewayServer {
    router: Router,
    routing: LocaleRouting,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    ///
    /// `negotiator` is required in production mode and ignored by the
    /// development fast path.
    pub fn new(
        config: GatewayConfig,
        negotiator: Option<Arc<dyn LocaleNegotiator>>,
    ) -> Result<Self, BuildError> {
        let routing = LocaleRouting::from_config(&config, negotiator)?;
        let router = Self::build_router(&config);
        Ok(Self {
            router,
            routing,
            config,
        })
    }

    /// Build the Axum router with the application handlers.
    fn build_router(config: &GatewayConfig) -> Router {
        let locales = Arc::new(config.locales.clone());
        Router::new()
            .route("/healthcheck", get(healthcheck))
            .route("/", any(page))
            .route("/{*path}", any(page))
            .with_state(locales)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mode = ?self.config.mode,
            "Gateway starting"
        );

        // Outermost first: trace, request ids, timeout, then the locale
        // routing itself, all ahead of route matching.
        let service = ServiceBuilder::new()
            .map_response(|res: axum::response::Response<_>| res.map(axum::body::Body::new))
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
            .layer(propagate_request_id_layer())
            .layer(TimeoutLayer::new(Duration::from_secs(
                self.config.timeouts.request_secs,
            )))
            .layer(middleware::from_fn_with_state(self.routing, locale_routing))
            .service(self.router);

        axum::serve(listener, ServiceExt::into_make_service(service))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Liveness probe. Listed in the excluded prefixes, so it is served as-is in
/// both modes.
async fn healthcheck() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Echo page handler: reports the path as the application saw it after
/// locale routing, plus the leading segment when it is a supported locale.
async fn page(State(locales): State<Arc<LocaleConfig>>, uri: Uri) -> Json<serde_json::Value> {
    let path = uri.path();
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    let locale = locales.supported.iter().find(|l| l.as_str() == first);

    Json(serde_json::json!({ "locale": locale, "path": path }))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
