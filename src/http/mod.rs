//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, ambient layers)
//!     → request_id.rs (stamp & propagate x-request-id)
//!     → locale.rs (bypass matcher → route decision → execute)
//!         Pass      → inner handlers, request untouched
//!         Rewrite   → inner handlers, path prefixed with the locale
//!         Delegate  → negotiate.rs boundary, response returned verbatim
//!     → Send to client
//! ```

pub mod locale;
pub mod negotiate;
pub mod request_id;
pub mod server;

pub use locale::{locale_routing, BuildError, LocaleRouting};
pub use negotiate::LocaleNegotiator;
pub use request_id::{MakeRequestUuid, X_REQUEST_ID};
pub use server::GatewayServer;
