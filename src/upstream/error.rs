//! Upstream failure taxonomy.
//!
//! Every way a call to a backend can go wrong is an explicit variant here.
//! Call sites inspect the variant instead of catching errors in-band, so
//! each failure path is a visible branch.

use thiserror::Error;

/// Transport-level failures talking to an upstream.
///
/// Non-2xx responses are deliberately NOT in this enum: on the proxy path
/// they pass through untouched, and on the aggregate path they surface as
/// [`UpstreamCallResult::BadStatus`].
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The call exceeded the upstream's per-call timeout.
    #[error("upstream '{0}' timed out")]
    Timeout(String),

    /// A connection could not be established or failed mid-exchange.
    #[error("upstream '{0}' unreachable: {1}")]
    Unreachable(String, String),
}

/// Terminal outcome of one fan-out branch.
///
/// `Pending → {Success | TimedOut | Unreachable | BadStatus | MalformedPayload}`;
/// every variant is terminal, there are no retries.
#[derive(Debug)]
pub enum UpstreamCallResult {
    /// Call completed with status 200 and a parsable JSON body.
    Success(serde_json::Value),
    /// Call exceeded its per-call timeout.
    TimedOut,
    /// Connection could not be established.
    Unreachable,
    /// Call completed but with a status other than 200.
    BadStatus(u16),
    /// Call returned 200 but the body was not valid JSON.
    MalformedPayload,
}

impl UpstreamCallResult {
    /// Resolve this branch to its payload, or the declared fallback for any
    /// failure variant.
    pub fn into_value_or(self, fallback: serde_json::Value) -> serde_json::Value {
        match self {
            UpstreamCallResult::Success(value) => value,
            _ => fallback,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UpstreamCallResult::Success(_))
    }
}
