//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! At startup only:
//!     loader.rs reads GATEWAY_ENV once
//!     → overrides GatewayConfig.mode
//!     → mode is fixed for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload because the
//!   routing mode is fixed for the process lifetime by contract
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The environment is consulted exactly once, in the binary; library code
//!   receives the mode as an explicit value

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, mode_from_env, ConfigError};
pub use schema::GatewayConfig;
pub use schema::LocaleConfig;
pub use schema::RoutingMode;
