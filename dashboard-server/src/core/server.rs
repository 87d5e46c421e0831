//! Server Implementation
//!
//! Router assembly and HTTP listener lifecycle

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use std::net::SocketAddr;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use shared::error::{AppError, AppResult};

use crate::core::{Config, ServerState};

/// HTTP request log middleware
///
/// One line per request: request id, method, URI, status, latency.
/// Client errors log at warn, server errors at error.
async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();

    // Assigned by SetRequestIdLayer before we run
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            target: "http_access",
            request_id = %request_id,
            status = status.as_u16(),
            latency_ms,
            "{method} {uri}"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            target: "http_access",
            request_id = %request_id,
            status = status.as_u16(),
            latency_ms,
            "{method} {uri}"
        );
    } else {
        tracing::info!(
            target: "http_access",
            request_id = %request_id,
            status = status.as_u16(),
            latency_ms,
            "{method} {uri}"
        );
    }

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::dashboard::router())
        .merge(crate::api::payments::router())
        .merge(crate::api::campaigns::router())
        .merge(crate::api::users::router())
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (tests share routers this way)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Assemble the application router with the full middleware stack
    pub fn build_router(state: ServerState) -> Router {
        build_app()
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            .layer(middleware::from_fn(log_request))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    pub async fn run(&self) -> AppResult<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let config = state.config.clone();
        let app = Self::build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!("Dashboard server listening on http://{addr}");
        tracing::info!(
            "Environment: {}, timezone: {}",
            config.environment,
            config.timezone
        );
        if !config.is_production() {
            tracing::info!(
                "Try: curl http://localhost:{}/api/dashboard/<username>",
                self.config.http_port
            );
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
