//! LINE webhook: verify, extract text messages, compose, reply.

use super::{api_error, pipeline_error, ApiError, AppState};
use axum::{body::Bytes, extract::State, http::HeaderMap, http::StatusCode};
use ranbot_channels::line::{parse_webhook, verify_signature, SIGNATURE_HEADER};
use ranbot_core::message::ReplyPayload;
use tracing::{debug, error, info, warn};

/// `POST /callback`
///
/// Messages are answered inline, one at a time, before the webhook is
/// acknowledged. A failed composition is answered with the locale's apology;
/// a failed reply is logged. Either way the webhook gets `OK`.
pub(super) async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let line = state
        .line
        .as_ref()
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "LINE channel not configured"))?;

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());
    verify_signature(&line.secret, &body, signature).map_err(|e| {
        warn!("callback: rejected webhook: {e}");
        pipeline_error(e)
    })?;

    debug!("callback: body {}", String::from_utf8_lossy(&body));
    let messages = parse_webhook(&body)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    for incoming in messages {
        let payload = match state.composer.compose(&incoming.text).await {
            Ok(composed) => {
                info!(
                    "callback: {} from {} answered as {}",
                    incoming.id,
                    incoming.sender_id.as_deref().unwrap_or("unknown"),
                    composed.intent
                );
                composed.payload
            }
            Err(e) => {
                error!("callback: {} failed: {e}", incoming.id);
                ReplyPayload::text(state.composer.locale().apology())
            }
        };

        if let Err(e) = line.channel.reply(&incoming.reply_target, &payload).await {
            error!("callback: reply via {} failed: {e}", line.channel.name());
        }
    }

    Ok("OK")
}
