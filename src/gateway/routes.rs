//! Query routes: welcome, one-shot message, direct prompt, health.

use super::{api_error, pipeline_error, ApiError, AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use ranbot_core::message::ReplyPayload;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

pub(super) const WELCOME: &str = "Welcome to OpenAI Line Bot";

#[derive(Debug, Deserialize)]
pub(super) struct MessageQuery {
    q: Option<String>,
}

/// `GET /`
pub(super) async fn index() -> &'static str {
    WELCOME
}

/// `GET /message?q=`: compose one reply and return it as JSON.
///
/// Text replies are `{question, answer}`; image replies are
/// `{question, image_url}`.
pub(super) async fn message(
    State(state): State<AppState>,
    Query(params): Query<MessageQuery>,
) -> Result<Json<Value>, ApiError> {
    let question = params
        .q
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "missing query parameter 'q'"))?;

    let composed = state
        .composer
        .compose(&question)
        .await
        .map_err(|e| {
            warn!("message: failed: {e}");
            pipeline_error(e)
        })?;
    info!("message: answered as {}", composed.intent);

    Ok(Json(match composed.payload {
        ReplyPayload::Text { text } => json!({ "question": question, "answer": text }),
        ReplyPayload::TextWithImage { image_url, .. } => {
            json!({ "question": question, "image_url": image_url })
        }
    }))
}

/// `POST /direct`: forward the raw body to the text backend and return its
/// answer, which must itself be JSON.
pub(super) async fn direct(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    let answer = state
        .composer
        .text_backend()
        .complete(&body)
        .await
        .map_err(pipeline_error)?;

    serde_json::from_str(&answer).map(Json).map_err(|e| {
        warn!("direct: backend answer is not JSON: {e}");
        api_error(StatusCode::BAD_GATEWAY, "backend response is not valid JSON")
    })
}

/// `GET /health`
pub(super) async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.uptime.elapsed().as_secs(),
        "line": if state.line.is_some() { "configured" } else { "not_configured" },
    }))
}
