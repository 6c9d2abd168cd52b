//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route table)
//!     → request.rs (add request ID)
//!     → proxy route  → proxy::forward (single upstream)
//!     → aggregate route → aggregate::dashboard (N upstreams)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
