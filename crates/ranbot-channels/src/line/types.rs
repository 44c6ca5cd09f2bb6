//! LINE Messaging API wire types.

use serde::{Deserialize, Serialize};

/// Webhook request body.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct WebhookBody {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WebhookEvent {
    /// "message", "follow", "unfollow", "postback", ...
    #[serde(rename = "type")]
    pub event_type: String,
    pub reply_token: Option<String>,
    /// Milliseconds since the epoch.
    pub timestamp: Option<i64>,
    pub source: Option<EventSource>,
    pub message: Option<EventMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub(crate) struct EventSource {
    /// "user", "group", or "room".
    #[serde(rename = "type")]
    pub source_type: String,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct EventMessage {
    /// "text", "image", "sticker", ...
    #[serde(rename = "type")]
    pub message_type: String,
    pub id: Option<String>,
    pub text: Option<String>,
}

/// Body of `POST /v2/bot/message/reply`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReplyRequest {
    pub reply_token: String,
    pub messages: Vec<OutMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum OutMessage {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
}
