//! Shared outbound HTTP client with an explicit lifecycle.
//!
//! # Responsibilities
//! - Own the one hyper client reused by every request in the process
//! - Reuse TCP connections to upstreams across calls
//! - Close exactly once at shutdown
//!
//! # Design Decisions
//! - The hyper legacy client is internally synchronized; callers share it
//!   without per-call locking, so `client()` is just a cheap handle
//! - `close()` is idempotent (atomic flag) so shutdown paths can race safely
//! - Constructed explicitly at startup and passed through AppState, never a
//!   module-level global

use std::sync::atomic::{AtomicBool, Ordering};

use axum::body::Body;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

/// Process-wide pool of outbound connections. Exactly one live instance.
#[derive(Debug)]
pub struct ConnectionPool {
    client: Client<HttpConnector, Body>,
    closed: AtomicBool,
}

impl ConnectionPool {
    /// Create the pool. Called once at startup, before the first request.
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client,
            closed: AtomicBool::new(false),
        }
    }

    /// Hand out the shared client for one request/response exchange.
    ///
    /// Safe for unbounded concurrent use; connection-level safety is the
    /// transport's responsibility.
    pub fn client(&self) -> &Client<HttpConnector, Body> {
        &self.client
    }

    /// Close the pool. Idempotent; only the first call takes effect.
    ///
    /// Pooled connections are torn down when the pool is dropped; this marks
    /// the lifecycle boundary and must not block on in-flight calls.
    pub fn close(&self) {
        if self
            .closed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            tracing::info!("connection pool closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Default for ConnectionPool {
    fn default() -> Self {
        Self::new()
    }
}
