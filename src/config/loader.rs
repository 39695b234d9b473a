//! Configuration loading from disk and the startup environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{GatewayConfig, RoutingMode};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable consulted once at startup to pick the routing mode.
pub const MODE_ENV_VAR: &str = "GATEWAY_ENV";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Routing mode from the process environment, if set.
///
/// Read exactly once, at startup, by the binary; everything downstream takes
/// the mode as an explicit value. Any value other than `production` selects
/// development.
pub fn mode_from_env() -> Option<RoutingMode> {
    let value = std::env::var(MODE_ENV_VAR).ok()?;
    if value == "production" {
        Some(RoutingMode::Production)
    } else {
        Some(RoutingMode::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_roundtrip() {
        let path = std::env::temp_dir().join("locale-gateway-loader-test.toml");
        fs::write(
            &path,
            r#"
            mode = "production"

            [locales]
            default_locale = "en"
            supported = ["en", "fr"]
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.mode, RoutingMode::Production);
        assert_eq!(config.locales.supported, vec!["en", "fr"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let path = std::env::temp_dir().join("locale-gateway-loader-invalid.toml");
        fs::write(
            &path,
            r#"
            [locales]
            default_locale = "fr"
            supported = ["en"]
            "#,
        )
        .unwrap();

        match load_config(&path) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation failure, got {other:?}"),
        }

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_config_missing_file() {
        let missing = std::env::temp_dir().join("locale-gateway-does-not-exist.toml");
        assert!(matches!(load_config(&missing), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_mode_from_env() {
        // One test owns the variable to avoid cross-test races.
        std::env::remove_var(MODE_ENV_VAR);
        assert_eq!(mode_from_env(), None);

        std::env::set_var(MODE_ENV_VAR, "production");
        assert_eq!(mode_from_env(), Some(RoutingMode::Production));

        std::env::set_var(MODE_ENV_VAR, "staging");
        assert_eq!(mode_from_env(), Some(RoutingMode::Development));

        std::env::remove_var(MODE_ENV_VAR);
    }
}
