//! Locale Routing Middleware.
//! Executes the per-request route decision.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{uri::PathAndQuery, Request, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::schema::{GatewayConfig, RoutingMode};
use crate::http::negotiate::LocaleNegotiator;
use crate::observability::metrics;
use crate::routing::matcher::{bypass_matcher, Matcher, OrMatcher};
use crate::routing::policy::{policy_for, RouteDecision, RoutePolicy};

/// Error constructing the middleware state.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("production mode requires a locale negotiator to delegate to")]
    MissingNegotiator,
}

/// State behind the locale routing middleware, built once at startup.
///
/// Holds the compiled bypass matcher (the stand-in for the hosting
/// framework's static route matcher), the mode-specific policy, and the
/// negotiator when one is installed.
#[derive(Clone)]
pub struct LocaleRouting {
    matcher: Arc<OrMatcher>,
    policy: Arc<dyn RoutePolicy>,
    negotiator: Option<Arc<dyn LocaleNegotiator>>,
}

impl LocaleRouting {
    /// Build the middleware state for the configured mode.
    ///
    /// Production mode without a negotiator is a wiring mistake and fails
    /// here, at startup, rather than on the first delegated request.
    pub fn from_config(
        config: &GatewayConfig,
        negotiator: Option<Arc<dyn LocaleNegotiator>>,
    ) -> Result<Self, BuildError> {
        if config.mode == RoutingMode::Production && negotiator.is_none() {
            return Err(BuildError::MissingNegotiator);
        }
        Ok(Self {
            matcher: Arc::new(bypass_matcher()),
            policy: Arc::from(policy_for(config)),
            negotiator,
        })
    }

    /// Decide how a request is handled. Excluded paths short-circuit to
    /// `Pass` before the policy runs, in both modes, so the negotiator never
    /// sees them.
    pub fn decide(&self, req: &Request<Body>) -> RouteDecision {
        if self.matcher.matches(req) {
            return RouteDecision::Pass;
        }
        self.policy.route(req)
    }
}

/// The middleware itself. Wire with
/// `axum::middleware::from_fn_with_state(routing, locale_routing)`, wrapped
/// around the router rather than added with `Router::layer`: rewrites must
/// run before route matching to be visible to it.
pub async fn locale_routing(
    State(routing): State<LocaleRouting>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let decision = routing.decide(&req);
    metrics::record_decision(&decision);
    tracing::debug!(
        path = %req.uri().path(),
        decision = decision.label(),
        "Routing request"
    );

    match decision {
        RouteDecision::Pass => next.run(req).await,
        RouteDecision::Rewrite(path) => {
            let req = rewrite_request(req, &path);
            next.run(req).await
        }
        RouteDecision::Delegate => match routing.negotiator.as_ref() {
            Some(negotiator) => negotiator.handle(req).await,
            None => {
                // Unreachable when built through from_config.
                tracing::error!("Delegate decision with no negotiator installed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
    }
}

/// Replace the request URI's path, preserving the query string and the rest
/// of the URI. The client-visible URL is untouched; only the internally
/// routed path changes.
fn rewrite_request(mut req: Request<Body>, new_path: &str) -> Request<Body> {
    let original = req.uri().clone();
    let path_and_query = match original.query() {
        Some(query) => format!("{new_path}?{query}"),
        None => new_path.to_string(),
    };

    match PathAndQuery::try_from(path_and_query.as_str()) {
        Ok(path_and_query) => {
            let mut parts = original.clone().into_parts();
            parts.path_and_query = Some(path_and_query);
            *req.uri_mut() = Uri::from_parts(parts).unwrap_or(original);
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = new_path,
                "Rewritten path is not a valid URI path; keeping original"
            );
        }
    }
    req
}
