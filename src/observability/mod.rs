//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging only; metrics exposition is an external concern
//! - Request ID flows through all handler logs

pub mod logging;
