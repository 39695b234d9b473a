//! Request matching logic.
//!
//! # Responsibilities
//! - Match path prefixes (case-sensitive)
//! - Detect static-asset-looking paths (dot heuristic)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - No regex to guarantee O(n) matching
//! - The dot heuristic is a deliberate approximation: any `.` in the path is
//!   treated as a file extension, so `/v1.2/page` is also skipped

use axum::body::Body;
use axum::http::Request;

/// Framework-internal and platform prefixes that never carry a locale.
pub const EXCLUDED_PREFIXES: [&str; 5] =
    ["/_next", "/api", "/_vercel", "/monitoring", "/healthcheck"];

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request<Body>) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        req.uri().path().starts_with(&self.prefix)
    }
}

/// Matches paths that look like static asset requests.
#[derive(Debug, Clone)]
pub struct StaticAssetMatcher;

impl Matcher for StaticAssetMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        req.uri().path().contains('.')
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct OrMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl OrMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for OrMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        // Any matcher passing is enough (OR)
        self.matchers.iter().any(|m| m.matches(req))
    }
}

/// The compiled bypass list: excluded prefixes plus the static-asset check.
///
/// This is the Rust rendition of the hosting framework's static route
/// matcher; requests it matches bypass locale handling entirely, in both
/// modes.
pub fn bypass_matcher() -> OrMatcher {
    let mut matchers: Vec<Box<dyn Matcher>> = EXCLUDED_PREFIXES
        .iter()
        .map(|prefix| Box::new(PathPrefixMatcher::new(*prefix)) as Box<dyn Matcher>)
        .collect();
    matchers.push(Box::new(StaticAssetMatcher));
    OrMatcher::new(matchers)
}
