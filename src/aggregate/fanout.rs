//! Typed fan-out primitive.
//!
//! # Responsibilities
//! - Issue N independent upstream calls concurrently
//! - Wait for every branch to settle (a barrier, not a race)
//! - Return N results positionally correlated to the calls issued
//!
//! # Design Decisions
//! - A branch never raises: every outcome is an `UpstreamCallResult` variant
//! - Each branch carries its own timeout from the upstream registry
//! - No completion-order assumptions; callers key results by position

use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, Uri};
use futures_util::future::join_all;

use crate::upstream::{ConnectionPool, UpstreamCallResult};

/// One branch of a fan-out: a fully described upstream GET.
#[derive(Debug)]
pub struct UpstreamCall {
    /// Upstream name, for logging.
    pub name: &'static str,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub timeout: Duration,
}

/// Issue every call concurrently and wait for all of them to settle.
///
/// The returned vector has the same length and order as `calls`; a slow or
/// failed branch never short-circuits its siblings.
pub async fn fan_out(pool: &ConnectionPool, calls: Vec<UpstreamCall>) -> Vec<UpstreamCallResult> {
    join_all(calls.into_iter().map(|call| issue(pool, call))).await
}

/// Run one branch to its terminal state.
async fn issue(pool: &ConnectionPool, call: UpstreamCall) -> UpstreamCallResult {
    let mut request = Request::builder().method(Method::GET).uri(call.uri.clone());
    if let Some(headers) = request.headers_mut() {
        *headers = call.headers;
    }
    let request = match request.body(Body::empty()) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(upstream = call.name, error = %e, "failed to build fan-out request");
            return UpstreamCallResult::Unreachable;
        }
    };

    // The timeout covers the whole exchange, body read included.
    let exchange = async {
        let response = pool.client().request(request).await?;
        let status = response.status().as_u16();
        let bytes = axum::body::to_bytes(Body::new(response.into_body()), usize::MAX)
            .await
            .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { e.into() })?;
        Ok::<_, Box<dyn std::error::Error + Send + Sync>>((status, bytes))
    };

    match tokio::time::timeout(call.timeout, exchange).await {
        Err(_) => {
            tracing::warn!(upstream = call.name, "fan-out branch timed out");
            UpstreamCallResult::TimedOut
        }
        Ok(Err(e)) => {
            tracing::warn!(upstream = call.name, error = %e, "fan-out branch unreachable");
            UpstreamCallResult::Unreachable
        }
        Ok(Ok((status, bytes))) => {
            let result = resolve_branch(status, &bytes);
            if !result.is_success() {
                tracing::debug!(upstream = call.name, status, "fan-out branch degraded");
            }
            result
        }
    }
}

/// Classify a completed exchange: only a 200 with a parsable JSON body
/// contributes a payload.
fn resolve_branch(status: u16, body: &[u8]) -> UpstreamCallResult {
    if status != 200 {
        return UpstreamCallResult::BadStatus(status);
    }
    match serde_json::from_slice(body) {
        Ok(value) => UpstreamCallResult::Success(value),
        Err(_) => UpstreamCallResult::MalformedPayload,
    }
}
