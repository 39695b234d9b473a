//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (route decision counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; level set through RUST_LOG
//! - Request ID flows through all log lines via the request-id layers
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;
