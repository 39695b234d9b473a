//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the locale gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Routing mode, fixed for the process lifetime.
    pub mode: RoutingMode,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Locale settings consumed by the routing policy and, opaquely, by the
    /// injected negotiator.
    pub locales: LocaleConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// How incoming requests are locale-routed.
///
/// `Development` runs the single-locale rewrite fast path; `Production`
/// delegates every request to the installed negotiator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    #[default]
    Development,
    Production,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Locale settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale prefixed onto page paths by the development rewrite.
    pub default_locale: String,

    /// Locales the application serves. The negotiator receives this list;
    /// the development fast path only ever uses `default_locale`.
    pub supported: Vec<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            supported: vec!["en".to_string()],
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Expose a Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Address the metrics exporter listens on.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9100".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.mode, RoutingMode::Development);
        assert_eq!(config.locales.default_locale, "en");
        assert_eq!(config.locales.supported, vec!["en".to_string()]);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.mode, RoutingMode::Development);
        assert_eq!(config.locales.default_locale, "en");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: GatewayConfig = toml::from_str(
            r#"
            mode = "production"

            [locales]
            default_locale = "de"
            supported = ["de", "en"]

            [listener]
            bind_address = "127.0.0.1:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.mode, RoutingMode::Production);
        assert_eq!(config.locales.default_locale, "de");
        assert_eq!(config.locales.supported.len(), 2);
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        // Untouched sections keep their defaults.
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
