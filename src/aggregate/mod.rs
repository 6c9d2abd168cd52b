//! Aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! GET /api/dashboard
//!     → dashboard.rs (declare the three fixed branches + fallbacks)
//!     → fanout.rs (issue concurrently, barrier on all branches)
//!     → per-branch UpstreamCallResult
//!     → composite payload, always 200 and fully formed
//! ```
//!
//! # Design Decisions
//! - Branch failures degrade to fallbacks (null / empty list), never to errors
//! - List-valued fields are truncated to a configured maximum after fetch
//! - Results correlate to calls positionally; assembly is by field name

pub mod dashboard;
pub mod fanout;

pub use dashboard::dashboard;
pub use fanout::{fan_out, UpstreamCall};
