//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all gateway routes
//! - Wire up middleware (tracing, timeout, request ID)
//! - Dispatch proxy routes to the matching upstream
//! - Serve with graceful shutdown and close the pool exactly once after

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, on, post, MethodFilter},
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::aggregate::dashboard;
use crate::config::{AggregateConfig, GatewayConfig};
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::proxy::forward;
use crate::upstream::{ConnectionPool, Registry, UpstreamTarget};

/// Full CRUD method set for entity proxy routes.
const CRUD: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PUT)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::DELETE);

/// Read/create method set for collection-root routes.
const GET_POST: MethodFilter = MethodFilter::GET.or(MethodFilter::POST);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub pool: Arc<ConnectionPool>,
    pub aggregate: AggregateConfig,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Resolves the upstream registry and creates the connection pool; both
    /// are immutable/shared for the life of the process.
    pub fn new(config: GatewayConfig) -> Self {
        let state = AppState {
            registry: Arc::new(Registry::from_config(&config.upstreams)),
            pool: Arc::new(ConnectionPool::new()),
            aggregate: config.aggregate.clone(),
        };

        let router = Self::build_router(&config, state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/api/dashboard", get(dashboard))
            .route("/api/users/{*path}", on(CRUD, proxy_users))
            .route("/api/products/{*path}", on(CRUD, proxy_products))
            .route("/api/products", on(GET_POST, proxy_products_root))
            .route("/api/orders/{*path}", on(CRUD, proxy_orders))
            .route("/api/orders", on(GET_POST, proxy_orders_root))
            .route("/api/payments/{*path}", on(GET_POST, proxy_payments))
            .route("/api/payments", on(GET_POST, proxy_payments_root))
            .route("/api/auth/{*path}", post(proxy_auth))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once the accept loop has drained after Ctrl+C or a shutdown
    /// trigger; the connection pool is closed on the way out.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let pool = self.state.pool.clone();
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        pool.close();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness probe; constant payload, no upstream calls.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "gateway-bff" }))
}

/// Resolve the target URI for one upstream and hand off to the forwarder.
async fn proxy_to(
    state: &AppState,
    target: &UpstreamTarget,
    path: String,
    request: Request<Body>,
) -> Response {
    let uri = match target.endpoint(&path, request.uri().query()) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(upstream = target.name, path = %path, error = %e, "invalid target URL");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Invalid upstream target" })),
            )
                .into_response();
        }
    };

    tracing::debug!(
        request_id = %request.request_id(),
        method = %request.method(),
        upstream = target.name,
        target = %uri,
        "Proxying request"
    );

    forward(&state.pool, target, uri, request).await
}

async fn proxy_users(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request<Body>,
) -> Response {
    // The user service mounts its routes at the root, no /users prefix.
    let target = state.registry.user.clone();
    proxy_to(&state, &target, format!("/{}", path), request).await
}

async fn proxy_products(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request<Body>,
) -> Response {
    let target = state.registry.product.clone();
    proxy_to(&state, &target, format!("/products/{}", path), request).await
}

async fn proxy_products_root(State(state): State<AppState>, request: Request<Body>) -> Response {
    let target = state.registry.product.clone();
    proxy_to(&state, &target, "/products".to_string(), request).await
}

async fn proxy_orders(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request<Body>,
) -> Response {
    let target = state.registry.order.clone();
    proxy_to(&state, &target, format!("/orders/{}", path), request).await
}

async fn proxy_orders_root(State(state): State<AppState>, request: Request<Body>) -> Response {
    let target = state.registry.order.clone();
    proxy_to(&state, &target, "/orders".to_string(), request).await
}

async fn proxy_payments(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request<Body>,
) -> Response {
    let target = state.registry.payment.clone();
    proxy_to(&state, &target, format!("/payments/{}", path), request).await
}

async fn proxy_payments_root(State(state): State<AppState>, request: Request<Body>) -> Response {
    let target = state.registry.payment.clone();
    proxy_to(&state, &target, "/payments".to_string(), request).await
}

async fn proxy_auth(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request<Body>,
) -> Response {
    // Auth endpoints live on the user service.
    let target = state.registry.user.clone();
    proxy_to(&state, &target, format!("/auth/{}", path), request).await
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
