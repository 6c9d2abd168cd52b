//! Dashboard aggregation orchestrator.
//!
//! One inbound GET fans out to three fixed upstream resources (the caller's
//! profile, their recent orders, and a featured-products sample) and merges
//! whatever came back into a single composite payload. A failed branch never
//! fails the request; it degrades to its documented fallback value.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};

use crate::aggregate::fanout::{fan_out, UpstreamCall};
use crate::http::server::AppState;
use crate::proxy::auth_headers;
use crate::upstream::UpstreamCallResult;

/// `GET /api/dashboard`: aggregate profile + recent orders + featured products.
///
/// Always replies 200 with all three fields present, regardless of which
/// branches failed. Assembly is keyed by field name, not completion order.
pub async fn dashboard(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = auth_headers(&headers);
    let max_items = state.aggregate.max_list_items;

    let calls = match build_calls(&state, &auth, max_items) {
        Ok(calls) => calls,
        Err(e) => {
            tracing::error!(error = %e, "failed to build dashboard fan-out");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Gateway misconfiguration" })),
            )
                .into_response();
        }
    };

    let results = fan_out(&state.pool, calls).await;
    let [profile, orders, products]: [UpstreamCallResult; 3] = match results.try_into() {
        Ok(results) => results,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Fan-out result mismatch" })),
            )
                .into_response();
        }
    };

    Json(json!({
        "user": profile.into_value_or(Value::Null),
        "recent_orders": truncate_list(orders, max_items),
        "featured_products": truncate_list(products, max_items),
    }))
    .into_response()
}

/// The three fixed branches, positionally: [profile, orders, products].
fn build_calls(
    state: &AppState,
    auth: &HeaderMap,
    max_items: usize,
) -> Result<Vec<UpstreamCall>, axum::http::uri::InvalidUri> {
    let registry = &state.registry;
    let limit = format!("limit={}", max_items);

    Ok(vec![
        UpstreamCall {
            name: registry.user.name,
            uri: registry.user.endpoint("/users/me", None)?,
            headers: auth.clone(),
            timeout: registry.user.timeout,
        },
        UpstreamCall {
            name: registry.order.name,
            uri: registry.order.endpoint("/orders", None)?,
            headers: auth.clone(),
            timeout: registry.order.timeout,
        },
        UpstreamCall {
            name: registry.product.name,
            uri: registry.product.endpoint("/products", Some(&limit))?,
            headers: HeaderMap::new(),
            timeout: registry.product.timeout,
        },
    ])
}

/// Resolve a list-valued branch: failures and non-array payloads fall back to
/// an empty sequence; successful arrays are truncated to `max` entries.
fn truncate_list(result: UpstreamCallResult, max: usize) -> Value {
    match result.into_value_or(Value::Array(Vec::new())) {
        Value::Array(mut items) => {
            items.truncate(max);
            Value::Array(items)
        }
        _ => Value::Array(Vec::new()),
    }
}
