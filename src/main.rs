//! Aggregation-and-proxy gateway ("BFF").
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                   GATEWAY                     │
//!   Client Request       │  ┌────────┐   ┌───────────────────────────┐  │
//!   ─────────────────────┼─▶│  http  │──▶│ route classification      │  │
//!                        │  │ server │   │ (proxy vs. aggregate)     │  │
//!                        │  └────────┘   └─────┬───────────────┬─────┘  │
//!                        │                     │               │        │
//!                        │                     ▼               ▼        │
//!                        │             ┌──────────────┐ ┌────────────┐  │
//!                        │             │ proxy        │ │ aggregate  │  │      Backends
//!                        │             │ forward      │ │ fan-out    │──┼──▶ user/product/
//!                        │             │ (1 upstream) │ │ (N, barrier)│ │     order/payment
//!                        │             └──────┬───────┘ └─────┬──────┘  │
//!                        │                    │               │         │
//!                        │                    ▼               ▼         │
//!   Client Response      │             ┌──────────────────────────┐    │
//!   ◀────────────────────┼─────────────│ shared connection pool   │    │
//!                        │             └──────────────────────────┘    │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;

use gateway_bff::config::{load_config, GatewayConfig};
use gateway_bff::observability::logging;
use gateway_bff::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration: optional TOML path as first argument, defaults
    // otherwise. Immutable after this point.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => GatewayConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("gateway-bff v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        user = %config.upstreams.user.base_url,
        product = %config.upstreams.product.base_url,
        order = %config.upstreams.order.base_url,
        payment = %config.upstreams.payment.base_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
