//! Generic reverse proxy: forward one inbound request to one upstream.
//!
//! # Responsibilities
//! - Build the outbound call from method, filtered headers, and raw body
//! - Enforce the target's per-call timeout
//! - Map transport failures to gateway status codes (504 timeout, 502 connect)
//! - Pass every completed upstream exchange through unchanged
//!
//! # Design Decisions
//! - The body is forwarded byte-for-byte; the gateway never re-encodes
//! - Non-2xx upstream statuses are NOT gateway errors; they pass through
//! - No retries: every failure is terminal and mapped exactly once

use axum::body::Body;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::proxy::headers::filter_proxy_headers;
use crate::upstream::{ConnectionPool, UpstreamError, UpstreamTarget};

/// Response body authored by the gateway itself for transport failures,
/// distinct from upstream-authored bodies which pass through verbatim.
fn gateway_error(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

/// Terminal mapping from transport failure to gateway status. No retries.
fn transport_failure(error: UpstreamError) -> Response {
    tracing::warn!(error = %error, "upstream transport failure");
    match error {
        UpstreamError::Timeout(_) => {
            gateway_error(StatusCode::GATEWAY_TIMEOUT, "Upstream service timed out")
        }
        UpstreamError::Unreachable(..) => gateway_error(
            StatusCode::BAD_GATEWAY,
            "Could not connect to upstream service",
        ),
    }
}

/// Forward `request` to `uri` on the given upstream.
///
/// Pure function of (request, target) plus the shared pool; the caller has
/// already resolved the target URI through the registry.
pub async fn forward(
    pool: &ConnectionPool,
    target: &UpstreamTarget,
    uri: Uri,
    request: Request<Body>,
) -> Response {
    let (parts, body) = request.into_parts();

    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(upstream = target.name, error = %e, "failed to read request body");
            return gateway_error(StatusCode::BAD_REQUEST, "Could not read request body");
        }
    };

    let mut outbound = Request::builder().method(parts.method.clone()).uri(uri);
    if let Some(headers) = outbound.headers_mut() {
        *headers = filter_proxy_headers(&parts.headers);
    }
    let outbound = match outbound.body(Body::from(body_bytes)) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(upstream = target.name, error = %e, "failed to build outbound request");
            return gateway_error(StatusCode::INTERNAL_SERVER_ERROR, "Invalid outbound request");
        }
    };

    // The timeout covers the whole exchange, body read included; an upstream
    // that answers headers quickly and then trickles the body still maps to 504.
    let exchange = async {
        let response = pool.client().request(outbound).await?;
        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(Body::new(body), usize::MAX)
            .await
            .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { e.into() })?;
        Ok::<_, Box<dyn std::error::Error + Send + Sync>>((parts, bytes))
    };

    match tokio::time::timeout(target.timeout, exchange).await {
        Err(_) => transport_failure(UpstreamError::Timeout(target.name.to_string())),
        Ok(Err(e)) => transport_failure(UpstreamError::Unreachable(
            target.name.to_string(),
            e.to_string(),
        )),
        Ok(Ok((parts, bytes))) => {
            // Passthrough: whatever the upstream said, 2xx or not.
            Response::from_parts(parts, Body::from(bytes))
        }
    }
}
