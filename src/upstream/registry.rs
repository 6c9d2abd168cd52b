//! Upstream registry: logical service name → base address + per-call timeout.
//!
//! Built once from config at startup and shared read-only via Arc; no lock
//! is needed because nothing mutates it after construction.

use std::time::Duration;

use axum::http::uri::InvalidUri;
use axum::http::Uri;

use crate::config::UpstreamsConfig;

/// One logical backend service.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    /// Logical name ("user", "product", "order", "payment").
    pub name: &'static str,
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Per-call timeout applied to every request to this service.
    pub timeout: Duration,
}

impl UpstreamTarget {
    fn new(name: &'static str, base_url: &str, timeout_secs: u64) -> Self {
        Self {
            name,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Build the outbound URI for a path under this service, preserving the
    /// caller's query string. `path` must start with '/'.
    pub fn endpoint(&self, path: &str, query: Option<&str>) -> Result<Uri, InvalidUri> {
        let uri = match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        };
        uri.parse()
    }
}

/// Immutable name → target mapping, resolved once at process start.
#[derive(Debug, Clone)]
pub struct Registry {
    pub user: UpstreamTarget,
    pub product: UpstreamTarget,
    pub order: UpstreamTarget,
    pub payment: UpstreamTarget,
}

impl Registry {
    /// Resolve all targets from validated configuration.
    pub fn from_config(config: &UpstreamsConfig) -> Self {
        Self {
            user: UpstreamTarget::new("user", &config.user.base_url, config.user.timeout_secs),
            product: UpstreamTarget::new(
                "product",
                &config.product.base_url,
                config.product.timeout_secs,
            ),
            order: UpstreamTarget::new("order", &config.order.base_url, config.order.timeout_secs),
            payment: UpstreamTarget::new(
                "payment",
                &config.payment.base_url,
                config.payment.timeout_secs,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamsConfig;

    fn registry() -> Registry {
        Registry::from_config(&UpstreamsConfig::default())
    }

    #[test]
    fn endpoint_joins_path() {
        let uri = registry().user.endpoint("/users/me", None).unwrap();
        assert_eq!(uri.to_string(), "http://user-service:3000/users/me");
    }

    #[test]
    fn endpoint_preserves_query() {
        let uri = registry()
            .product
            .endpoint("/products", Some("limit=5&offset=10"))
            .unwrap();
        assert_eq!(
            uri.to_string(),
            "http://product-service:8000/products?limit=5&offset=10"
        );
    }

    #[test]
    fn empty_query_is_dropped() {
        let uri = registry().order.endpoint("/orders", Some("")).unwrap();
        assert_eq!(uri.to_string(), "http://order-service:8080/orders");
    }

    #[test]
    fn trailing_slash_in_base_is_normalized() {
        let target = UpstreamTarget::new("user", "http://localhost:9000/", 5);
        let uri = target.endpoint("/auth/login", None).unwrap();
        assert_eq!(uri.to_string(), "http://localhost:9000/auth/login");
    }
}
