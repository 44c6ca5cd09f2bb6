//! Webhook event extraction.

use super::types::WebhookBody;
use chrono::{DateTime, Utc};
use ranbot_core::{error::RanbotError, message::IncomingMessage};
use tracing::debug;
use uuid::Uuid;

/// Extract the answerable text messages from a webhook body.
///
/// Only `message` events with a `text` message and a reply token qualify;
/// everything else (follows, stickers, images, redeliveries without a token)
/// is skipped. An empty event list is valid and yields nothing.
pub fn parse_webhook(body: &[u8]) -> Result<Vec<IncomingMessage>, RanbotError> {
    let parsed: WebhookBody = serde_json::from_slice(body)
        .map_err(|e| RanbotError::Channel(format!("line: malformed webhook body: {e}")))?;

    let mut messages = Vec::new();
    for event in parsed.events {
        if event.event_type != "message" {
            debug!("line: skipping {} event", event.event_type);
            continue;
        }
        let Some(message) = event.message else {
            continue;
        };
        if message.message_type != "text" {
            debug!("line: skipping {} message", message.message_type);
            continue;
        }
        let (Some(text), Some(reply_token)) = (message.text, event.reply_token) else {
            continue;
        };

        let timestamp = event
            .timestamp
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_else(Utc::now);

        messages.push(IncomingMessage {
            id: Uuid::new_v4(),
            channel: "line".to_string(),
            sender_id: event.source.and_then(|s| s.user_id),
            text,
            timestamp,
            reply_target: reply_token,
        });
    }

    Ok(messages)
}
