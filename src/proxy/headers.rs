//! Header filtering for forwarded requests.
//!
//! # Responsibilities
//! - Strip the inbound Host header (the client regenerates it for the
//!   new destination from the target authority)
//! - Strip hop-by-hop headers that describe the inbound connection
//! - Forward the caller's Authorization credential unchanged
//!
//! # Design Decisions
//! - Pure transforms over HeaderMap; no I/O, independently testable
//! - Everything not on the denylist passes through as provided

use axum::http::header::{self, HeaderMap, HeaderName};

/// Connection-scoped headers that must not travel to the upstream.
const HOP_BY_HOP: [HeaderName; 9] = [
    header::HOST,
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Filter inbound headers for forwarding on the proxy path.
///
/// Removes Host and hop-by-hop headers; everything else (including
/// Authorization) is copied as-is.
pub fn filter_proxy_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if !HOP_BY_HOP.contains(name) {
            outbound.append(name.clone(), value.clone());
        }
    }
    outbound
}

/// Extract the caller's Authorization credential for aggregate fan-out calls.
///
/// Returns a header set containing only `Authorization`, or an empty set if
/// the caller sent none.
pub fn auth_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::new();
    if let Some(credential) = inbound.get(header::AUTHORIZATION) {
        outbound.insert(header::AUTHORIZATION, credential.clone());
    }
    outbound
}
