//! Aggregation-and-proxy HTTP gateway.
//!
//! A single entry point in front of a set of backend services: it reverse-
//! proxies arbitrary requests to the right upstream and aggregates several
//! upstreams into one composite response, tolerating partial failure.

pub mod aggregate;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
