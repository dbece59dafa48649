//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the scheme is one a browser will accept
//! - Validate addresses, URLs and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HandlerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::HandlerConfig;
use crate::http::HEALTH_PATH;
use crate::protocol::Scheme;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &HandlerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Scheme::parse(&config.protocol.scheme) {
        errors.push(ValidationError::new("protocol.scheme", e.to_string()));
    }

    if config.protocol.name.trim().is_empty() {
        errors.push(ValidationError::new("protocol.name", "must not be empty"));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("`{}` is not a socket address", config.listener.bind_address),
        ));
    }

    match Url::parse(&config.endpoints.public_url) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::new(
                    "endpoints.public_url",
                    "must be an http or https URL",
                ));
            }
            if url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::new(
                    "endpoints.public_url",
                    "must not carry a query or fragment",
                ));
            }
        }
        Err(e) => errors.push(ValidationError::new("endpoints.public_url", e.to_string())),
    }

    for (field, path) in [
        ("endpoints.resolve_path", &config.endpoints.resolve_path),
        ("endpoints.render_path", &config.endpoints.render_path),
    ] {
        if !path.starts_with('/') || path.contains(['?', '#']) {
            errors.push(ValidationError::new(
                field,
                format!("`{}` must be an absolute path without query", path),
            ));
        } else if path == HEALTH_PATH {
            errors.push(ValidationError::new(field, format!("`{}` is reserved", HEALTH_PATH)));
        }
    }

    if config.endpoints.resolve_path == config.endpoints.render_path {
        errors.push(ValidationError::new(
            "endpoints.resolve_path",
            "must differ from endpoints.render_path",
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be > 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!(
                "`{}` is not a socket address",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
