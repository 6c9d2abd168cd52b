//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Resolve registry + pool → Bind listener → Serve
//!
//! Shutdown:
//!     Signal received → Stop accepting → Drain connections → Close pool → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then pool/registry, then listener
//! - The pool is closed exactly once, after the accept loop drains
//! - Shutdown never blocks on abandoned upstream calls

pub mod shutdown;

pub use shutdown::Shutdown;
