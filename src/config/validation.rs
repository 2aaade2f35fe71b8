//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Check addresses and origins parse
//! - Reject seed projects the store would not accept
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Duplicate seed titles are allowed; the later one wins on load

use axum::http::HeaderValue;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("cors origin {0:?} is not a valid header value")]
    CorsOrigin(String),

    #[error("projects[{0}] has a blank title")]
    BlankSeedTitle(usize),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    for origin in &config.cors.allowed_origins {
        if HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::CorsOrigin(origin.clone()));
        }
    }

    for (i, project) in config.projects.iter().enumerate() {
        if project.has_blank_title() {
            errors.push(ValidationError::BlankSeedTitle(i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
