//! Per-request route decisions.
//!
//! # Responsibilities
//! - Decide, per request, between passing through, rewriting the path with
//!   a locale prefix, and delegating to the negotiator
//! - Keep the decision a pure function of the request and the startup mode
//!
//! # Design Decisions
//! - One policy object per process, selected at startup from the routing
//!   mode; both modes satisfy the same `route(request) -> decision` contract
//! - Decisions carry data only; executing them (URI surgery, calling the
//!   negotiator) belongs to the middleware layer
//! - The development policy re-checks the bypass conditions itself so it
//!   stands alone even when the serving layer's matcher is absent

use axum::body::Body;
use axum::http::Request;

use crate::config::schema::{GatewayConfig, RoutingMode};
use crate::routing::matcher::{bypass_matcher, Matcher, OrMatcher};

/// Outcome of routing a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Continue with the request untouched.
    Pass,
    /// Serve the request under a new internal path; the client-visible URL
    /// is unchanged (rewrite, never redirect).
    Rewrite(String),
    /// Hand the request to the locale negotiator and return its response
    /// verbatim.
    Delegate,
}

impl RouteDecision {
    /// Stable label for logging and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Rewrite(_) => "rewrite",
            Self::Delegate => "delegate",
        }
    }
}

/// Uniform decision contract both routing modes satisfy.
pub trait RoutePolicy: Send + Sync {
    /// Decide how this request is locale-routed.
    fn route(&self, req: &Request<Body>) -> RouteDecision;
}

/// Development fast path: prefix every page path with one fixed locale.
///
/// Skips framework-internal prefixes and asset-looking paths; everything
/// else is served under `/{locale}{path}`. This avoids running full locale
/// negotiation on every reload during development.
#[derive(Debug)]
pub struct SingleLocaleRewrite {
    prefix: String,
    skip: OrMatcher,
}

impl SingleLocaleRewrite {
    pub fn new(locale: &str) -> Self {
        Self {
            prefix: format!("/{locale}"),
            skip: bypass_matcher(),
        }
    }
}

impl RoutePolicy for SingleLocaleRewrite {
    fn route(&self, req: &Request<Body>) -> RouteDecision {
        if self.skip.matches(req) {
            return RouteDecision::Pass;
        }
        RouteDecision::Rewrite(format!("{}{}", self.prefix, req.uri().path()))
    }
}

/// Production policy: every request goes to the negotiator.
#[derive(Debug)]
pub struct NegotiateAll;

impl RoutePolicy for NegotiateAll {
    fn route(&self, _req: &Request<Body>) -> RouteDecision {
        RouteDecision::Delegate
    }
}

/// Select the policy for the configured mode. Called once at startup.
pub fn policy_for(config: &GatewayConfig) -> Box<dyn RoutePolicy> {
    match config.mode {
        RoutingMode::Development => {
            Box::new(SingleLocaleRewrite::new(&config.locales.default_locale))
        }
        RoutingMode::Production => Box::new(NegotiateAll),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(path: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("http://example.com{path}"))
            .body(Body::default())
            .unwrap()
    }

    #[test]
    fn test_dev_rewrites_page_paths() {
        let policy = SingleLocaleRewrite::new("en");

        assert_eq!(
            policy.route(&request("/about")),
            RouteDecision::Rewrite("/en/about".to_string())
        );
        assert_eq!(
            policy.route(&request("/blog/posts/1")),
            RouteDecision::Rewrite("/en/blog/posts/1".to_string())
        );
        assert_eq!(
            policy.route(&request("/")),
            RouteDecision::Rewrite("/en/".to_string())
        );
    }

    #[test]
    fn test_dev_passes_excluded_prefixes() {
        let policy = SingleLocaleRewrite::new("en");

        assert_eq!(policy.route(&request("/api/users")), RouteDecision::Pass);
        assert_eq!(policy.route(&request("/_next/static/x")), RouteDecision::Pass);
        assert_eq!(policy.route(&request("/_vercel/insights")), RouteDecision::Pass);
        assert_eq!(policy.route(&request("/monitoring")), RouteDecision::Pass);
        assert_eq!(policy.route(&request("/healthcheck")), RouteDecision::Pass);
    }

    #[test]
    fn test_dev_passes_asset_paths() {
        let policy = SingleLocaleRewrite::new("en");

        assert_eq!(policy.route(&request("/favicon.ico")), RouteDecision::Pass);
        assert_eq!(policy.route(&request("/img/logo.png")), RouteDecision::Pass);
        // Dot heuristic misfire, accepted tradeoff.
        assert_eq!(policy.route(&request("/v1.2/page")), RouteDecision::Pass);
    }

    #[test]
    fn test_dev_uses_configured_locale() {
        let policy = SingleLocaleRewrite::new("de");

        assert_eq!(
            policy.route(&request("/about")),
            RouteDecision::Rewrite("/de/about".to_string())
        );
    }

    #[test]
    fn test_dev_rewrite_is_per_request_and_not_idempotent_across_paths() {
        // A request that already carries a locale prefix is just another
        // page path; the rewrite applies once per request, to whatever path
        // arrived.
        let policy = SingleLocaleRewrite::new("en");

        assert_eq!(
            policy.route(&request("/en/about")),
            RouteDecision::Rewrite("/en/en/about".to_string())
        );
    }

    #[test]
    fn test_production_always_delegates() {
        let policy = NegotiateAll;

        for path in ["/", "/about", "/api/users", "/favicon.ico", "/healthcheck"] {
            assert_eq!(policy.route(&request(path)), RouteDecision::Delegate);
        }
    }

    #[test]
    fn test_policy_selection_follows_mode() {
        let mut config = GatewayConfig::default();
        assert_eq!(
            policy_for(&config).route(&request("/about")),
            RouteDecision::Rewrite("/en/about".to_string())
        );

        config.mode = RoutingMode::Production;
        assert_eq!(
            policy_for(&config).route(&request("/about")),
            RouteDecision::Delegate
        );
    }
}
