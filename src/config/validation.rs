//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check upstream base URLs are absolute http(s) URLs
//! - Validate value ranges (timeouts > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{GatewayConfig, UpstreamConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("upstream '{name}' base_url '{url}' is not a valid http(s) URL")]
    InvalidBaseUrl { name: String, url: String },

    #[error("upstream '{0}' timeout_secs must be greater than zero")]
    ZeroTimeout(String),

    #[error("listener.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("aggregate.max_list_items must be greater than zero")]
    ZeroMaxListItems,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.aggregate.max_list_items == 0 {
        errors.push(ValidationError::ZeroMaxListItems);
    }

    let upstreams = [
        ("user", &config.upstreams.user),
        ("product", &config.upstreams.product),
        ("order", &config.upstreams.order),
        ("payment", &config.upstreams.payment),
    ];
    for (name, upstream) in upstreams {
        validate_upstream(name, upstream, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_upstream(name: &str, upstream: &UpstreamConfig, errors: &mut Vec<ValidationError>) {
    let valid_url = Url::parse(&upstream.base_url)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false);
    if !valid_url {
        errors.push(ValidationError::InvalidBaseUrl {
            name: name.to_string(),
            url: upstream.base_url.clone(),
        });
    }

    if upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout(name.to_string()));
    }
}
