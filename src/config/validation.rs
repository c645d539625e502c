//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address and downstream URL actually parse
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("downstream.base_url {0:?} is not a valid http(s) URL")]
    InvalidDownstreamUrl(String),

    #[error("downstream.path {0:?} must start with '/'")]
    InvalidDownstreamPath(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.downstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidDownstreamUrl(
            config.downstream.base_url.clone(),
        )),
    }

    if !config.downstream.path.starts_with('/') {
        errors.push(ValidationError::InvalidDownstreamPath(
            config.downstream.path.clone(),
        ));
    }

    if config.listener.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("listener.request_timeout_secs"));
    }
    if config.downstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("downstream.timeout_secs"));
    }
    if config.telemetry.export_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("telemetry.export_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
