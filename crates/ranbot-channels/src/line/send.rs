//! Reply API client.

use super::{
    types::{OutMessage, ReplyRequest},
    LineChannel,
};
use async_trait::async_trait;
use ranbot_core::{error::RanbotError, message::ReplyPayload, traits::Channel};
use tracing::{debug, warn};

/// Characters allowed in one text message.
pub(crate) const MAX_TEXT_CHARS: usize = 5000;
/// Messages allowed in one reply.
pub(crate) const MAX_MESSAGES: usize = 5;

/// Split `text` into chunks of at most `max_chars` characters, preferring to
/// break after a newline.
pub(crate) fn split_text(text: &str, max_chars: usize) -> Vec<&str> {
    if text.chars().count() <= max_chars {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let break_at = if end < rest.len() {
            rest[..end].rfind('\n').map(|i| i + 1).unwrap_or(end)
        } else {
            end
        };
        chunks.push(&rest[..break_at]);
        rest = &rest[break_at..];
    }

    chunks
}

/// Translate a payload into reply messages: text chunks first, then the image.
///
/// Chunks beyond the per-reply message limit are dropped. Empty text produces
/// no text message.
pub(crate) fn build_messages(payload: &ReplyPayload) -> Vec<OutMessage> {
    let image = payload.image_url().map(|url| OutMessage::Image {
        original_content_url: url.to_string(),
        preview_image_url: url.to_string(),
    });
    let text_slots = MAX_MESSAGES - usize::from(image.is_some());

    let body = payload.body();
    let mut messages: Vec<OutMessage> = if body.is_empty() {
        Vec::new()
    } else {
        split_text(body, MAX_TEXT_CHARS)
            .into_iter()
            .map(|chunk| OutMessage::Text {
                text: chunk.to_string(),
            })
            .collect()
    };
    if messages.len() > text_slots {
        warn!(
            "line: reply needs {} text messages, sending the first {text_slots}",
            messages.len()
        );
        messages.truncate(text_slots);
    }
    messages.extend(image);
    messages
}

impl LineChannel {
    async fn send_reply(&self, reply_token: &str, messages: Vec<OutMessage>) -> Result<(), RanbotError> {
        let url = format!("{}/v2/bot/message/reply", self.base_url);
        debug!("line: POST {url} ({} messages)", messages.len());

        let body = ReplyRequest {
            reply_token: reply_token.to_string(),
            messages,
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.channel_access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| RanbotError::Channel(format!("line reply failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(RanbotError::Channel(format!(
                "line reply returned {status}: {error_text}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Channel for LineChannel {
    fn name(&self) -> &str {
        "line"
    }

    async fn reply(&self, reply_target: &str, payload: &ReplyPayload) -> Result<(), RanbotError> {
        let messages = build_messages(payload);
        if messages.is_empty() {
            warn!("line: nothing to send for reply token");
            return Ok(());
        }
        self.send_reply(reply_target, messages).await
    }
}
