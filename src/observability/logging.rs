//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Respect RUST_LOG when set, fall back to the configured level
//!
//! # Design Decisions
//! - tracing crate for structured key-value logging
//! - Request ID flows through handler logs for correlation

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_level` is used when `RUST_LOG` is not set, scoped to this crate
/// plus tower-http's request traces.
pub fn init(default_level: &str) {
    let fallback = format!("gateway_bff={0},tower_http={0}", default_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
