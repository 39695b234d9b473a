//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check locale well-formedness and referential integrity
//! - Validate addresses and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("locale `{0}` is not a valid locale tag (lowercase ASCII letters, optional `-` region)")]
    MalformedLocale(String),

    #[error("default locale `{0}` is not in the supported locale list")]
    DefaultNotSupported(String),

    #[error("supported locale list is empty")]
    NoSupportedLocales,

    #[error("invalid {field} address `{value}`")]
    InvalidAddress { field: &'static str, value: String },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.locales.supported.is_empty() {
        errors.push(ValidationError::NoSupportedLocales);
    }
    for locale in config
        .locales
        .supported
        .iter()
        .chain(std::iter::once(&config.locales.default_locale))
    {
        if !is_locale_tag(locale) {
            errors.push(ValidationError::MalformedLocale(locale.clone()));
        }
    }
    if !config
        .locales
        .supported
        .contains(&config.locales.default_locale)
    {
        errors.push(ValidationError::DefaultNotSupported(
            config.locales.default_locale.clone(),
        ));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A locale tag usable as a path prefix: `en`, `pt-br`, `zh-hans`.
fn is_locale_tag(s: &str) -> bool {
    let mut parts = s.split('-');
    let primary = match parts.next() {
        Some(p) => p,
        None => return false,
    };
    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_lowercase()) {
        return false;
    }
    parts.all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
}
