//! Gateway: the HTTP surface connecting LINE and direct callers to the composer.
//!
//! Routes:
//! - `GET /` welcome text
//! - `GET /message?q=` one query, JSON answer
//! - `POST /direct` raw prompt to the text backend, JSON passthrough
//! - `POST /callback` LINE webhook
//! - `GET /health` liveness with uptime

mod callback;
mod routes;


use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use ranbot_core::{compose::Composer, config::ServerConfig, error::RanbotError, traits::Channel};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Shared state for gateway handlers.
#[derive(Clone)]
pub struct AppState {
    composer: Arc<Composer>,
    line: Option<LineWebhook>,
    uptime: Instant,
}

/// Everything `POST /callback` needs: the HMAC key and the reply channel.
#[derive(Clone)]
pub struct LineWebhook {
    secret: String,
    channel: Arc<dyn Channel>,
}

impl LineWebhook {
    pub fn new(secret: impl Into<String>, channel: Arc<dyn Channel>) -> Self {
        Self {
            secret: secret.into(),
            channel,
        }
    }
}

impl AppState {
    pub fn new(composer: Arc<Composer>, line: Option<LineWebhook>) -> Self {
        Self {
            composer,
            line,
            uptime: Instant::now(),
        }
    }
}

/// Handler error: status plus `{"error": ...}` body.
pub(crate) type ApiError = (StatusCode, Json<Value>);

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// HTTP status for a pipeline failure.
pub(crate) fn status_for(err: &RanbotError) -> StatusCode {
    match err {
        RanbotError::InvalidSignature => StatusCode::BAD_REQUEST,
        RanbotError::Backend(_) | RanbotError::Channel(_) => StatusCode::BAD_GATEWAY,
        RanbotError::DataUnavailable(_)
        | RanbotError::Config(_)
        | RanbotError::Io(_)
        | RanbotError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a pipeline failure to its HTTP response.
pub(crate) fn pipeline_error(err: RanbotError) -> ApiError {
    api_error(status_for(&err), err.to_string())
}

/// Build the axum router with shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/message", get(routes::message))
        .route("/direct", post(routes::direct))
        .route("/callback", post(callback::callback))
        .route("/health", get(routes::health))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024)) // 1 MB max request body
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;

    info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
        })
        .await?;

    Ok(())
}
