use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An incoming text message extracted from a channel event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "line").
    pub channel: String,
    /// Platform-specific user ID, when the event carries one.
    pub sender_id: Option<String>,
    /// Message text content.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Platform-specific handle for answering this message (e.g. a LINE reply token).
    pub reply_target: String,
}

/// The composed answer to one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyPayload {
    Text { text: String },
    TextWithImage { text: String, image_url: String },
}

impl ReplyPayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn with_image(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self::TextWithImage {
            text: text.into(),
            image_url: image_url.into(),
        }
    }

    /// The text block, present in every payload.
    pub fn body(&self) -> &str {
        match self {
            Self::Text { text } | Self::TextWithImage { text, .. } => text,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::TextWithImage { image_url, .. } => Some(image_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payload_accessors() {
        let p = ReplyPayload::text("hello");
        assert_eq!(p.body(), "hello");
        assert_eq!(p.image_url(), None);
    }

    #[test]
    fn test_image_payload_accessors() {
        let p = ReplyPayload::with_image("Here is the picture", "https://img.example/1.png");
        assert_eq!(p.body(), "Here is the picture");
        assert_eq!(p.image_url(), Some("https://img.example/1.png"));
    }
}
