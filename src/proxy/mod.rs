//! Reverse-proxy subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → headers.rs (strip Host + hop-by-hop, keep the rest)
//!     → forward.rs (build outbound call, per-call timeout)
//!     → upstream exchange
//!     → passthrough response, or gateway-authored 502/504
//! ```
//!
//! # Design Decisions
//! - Transport failures map to fixed gateway statuses; nothing is retried
//! - Valid upstream responses are never reinterpreted by the gateway

pub mod forward;
pub mod headers;

pub use forward::forward;
pub use headers::{auth_headers, filter_proxy_headers};
