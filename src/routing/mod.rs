//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → matcher.rs (bypass list: excluded prefixes, asset heuristic)
//!     → policy.rs (mode-specific decision)
//!     → Return: Pass | Rewrite(path) | Delegate
//!
//! Policy selection (at startup):
//!     RoutingMode
//!     → Development: SingleLocaleRewrite(default locale)
//!     → Production:  NegotiateAll
//!     → Frozen behind one RoutePolicy object
//! ```
//!
//! # Design Decisions
//! - Policy selected at startup, immutable at runtime
//! - No regex in hot path (prefix and substring checks only)
//! - Deterministic: same request always yields the same decision
//! - The excluded prefix set is fixed, not configuration

pub mod matcher;
pub mod policy;

pub use matcher::{bypass_matcher, Matcher, EXCLUDED_PREFIXES};
pub use policy::{policy_for, RouteDecision, RoutePolicy};
