//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Upstream service definitions.
    pub upstreams: UpstreamsConfig,

    /// Dashboard aggregation settings.
    pub aggregate: AggregateConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3001").
    pub bind_address: String,

    /// Overall request timeout (inbound side) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3001".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// One named upstream service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the service (e.g., "http://user-service:3000").
    pub base_url: String,

    /// Per-call timeout in seconds for requests to this service.
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    fn with_base(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: default_upstream_timeout(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::with_base("http://localhost:8080")
    }
}

fn default_upstream_timeout() -> u64 {
    10
}

/// The fixed set of backend services the gateway fronts.
///
/// Resolved into the upstream registry once at startup; immutable after.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamsConfig {
    pub user: UpstreamConfig,
    pub product: UpstreamConfig,
    pub order: UpstreamConfig,
    pub payment: UpstreamConfig,
}

impl Default for UpstreamsConfig {
    fn default() -> Self {
        Self {
            user: UpstreamConfig::with_base("http://user-service:3000"),
            product: UpstreamConfig::with_base("http://product-service:8000"),
            order: UpstreamConfig::with_base("http://order-service:8080"),
            payment: UpstreamConfig::with_base("http://payment-service:8090"),
        }
    }
}

/// Dashboard aggregation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregateConfig {
    /// Maximum number of entries returned for list-valued dashboard fields.
    pub max_list_items: usize,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self { max_list_items: 5 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
