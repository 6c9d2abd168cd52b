//! Upstream subsystem: who the gateway talks to and how.
//!
//! # Data Flow
//! ```text
//! GatewayConfig.upstreams
//!     → registry.rs (resolve name → base URL + timeout, once at startup)
//!     → pool.rs (one shared client, connection reuse)
//!     → error.rs (explicit outcome per call)
//! ```
//!
//! # Design Decisions
//! - Registry is immutable after startup (thread-safe without locks)
//! - One pool per process with an explicit create/close lifecycle
//! - Failure classes are enum variants, never in-band error strings

pub mod error;
pub mod pool;
pub mod registry;

pub use error::{UpstreamCallResult, UpstreamError};
pub use pool::ConnectionPool;
pub use registry::{Registry, UpstreamTarget};
