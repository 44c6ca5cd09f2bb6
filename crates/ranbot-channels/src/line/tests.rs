use super::send::{build_messages, split_text, MAX_MESSAGES, MAX_TEXT_CHARS};
use super::types::OutMessage;
use super::*;
use ranbot_core::{error::RanbotError, message::ReplyPayload, traits::Channel};

const SECRET: &str = "line-channel-secret";

fn text_event(text: &str, reply_token: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "message",
        "replyToken": reply_token,
        "timestamp": 1_686_800_000_000_i64,
        "source": {"type": "user", "userId": "U1234"},
        "message": {"type": "text", "id": "468789577898262530", "text": text}
    })
}

fn webhook(events: Vec<serde_json::Value>) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "destination": "Uxxxxxxxx",
        "events": events,
    }))
    .unwrap()
}

// --- signature ---

#[test]
fn test_signature_roundtrip() {
    let body = webhook(vec![text_event("sales report", "r1")]);
    let sig = sign(SECRET, &body).unwrap();
    assert!(verify_signature(SECRET, &body, Some(&sig)).is_ok());
}

#[test]
fn test_signature_depends_on_secret() {
    let sig = sign("key", b"{}").unwrap();
    assert_eq!(sig.len(), 44);
    assert!(verify_signature("key", b"{}", Some(&sig)).is_ok());
    assert!(verify_signature("other-key", b"{}", Some(&sig)).is_err());
}

#[test]
fn test_signature_rejects_tampered_body() {
    let body = webhook(vec![text_event("sales report", "r1")]);
    let sig = sign(SECRET, &body).unwrap();
    let tampered = webhook(vec![text_event("stock", "r1")]);
    assert!(matches!(
        verify_signature(SECRET, &tampered, Some(&sig)),
        Err(RanbotError::InvalidSignature)
    ));
}

#[test]
fn test_signature_missing_or_garbage() {
    assert!(matches!(
        verify_signature(SECRET, b"{}", None),
        Err(RanbotError::InvalidSignature)
    ));
    assert!(matches!(
        verify_signature(SECRET, b"{}", Some("")),
        Err(RanbotError::InvalidSignature)
    ));
    assert!(matches!(
        verify_signature(SECRET, b"{}", Some("not base64 !!")),
        Err(RanbotError::InvalidSignature)
    ));
}

// --- webhook parsing ---

#[test]
fn test_parse_text_message() {
    let msgs = parse_webhook(&webhook(vec![text_event("วันนี้ขายไปเท่าไร", "tok-1")])).unwrap();
    assert_eq!(msgs.len(), 1);
    let m = &msgs[0];
    assert_eq!(m.channel, "line");
    assert_eq!(m.text, "วันนี้ขายไปเท่าไร");
    assert_eq!(m.reply_target, "tok-1");
    assert_eq!(m.sender_id.as_deref(), Some("U1234"));
    assert_eq!(m.timestamp.timestamp_millis(), 1_686_800_000_000);
}

#[test]
fn test_parse_skips_non_text_events() {
    let follow = serde_json::json!({
        "type": "follow",
        "replyToken": "tok-f",
        "source": {"type": "user", "userId": "U1"}
    });
    let sticker = serde_json::json!({
        "type": "message",
        "replyToken": "tok-s",
        "message": {"type": "sticker", "id": "1", "packageId": "446", "stickerId": "1988"}
    });
    let no_token = serde_json::json!({
        "type": "message",
        "message": {"type": "text", "id": "2", "text": "hello"}
    });
    let msgs = parse_webhook(&webhook(vec![
        follow,
        sticker,
        no_token,
        text_event("stock", "tok-2"),
    ]))
    .unwrap();
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].text, "stock");
}

#[test]
fn test_parse_verification_ping_is_empty() {
    let msgs = parse_webhook(br#"{"destination":"U0","events":[]}"#).unwrap();
    assert!(msgs.is_empty());
}

#[test]
fn test_parse_malformed_body() {
    let err = parse_webhook(b"not json").unwrap_err();
    assert!(matches!(err, RanbotError::Channel(_)));
}

// --- reply building ---

#[test]
fn test_split_short_text() {
    assert_eq!(split_text("hello", MAX_TEXT_CHARS), vec!["hello"]);
}

#[test]
fn test_split_counts_characters_not_bytes() {
    // Thai characters are three bytes each.
    let text = "ก".repeat(12);
    let chunks = split_text(&text, 5);
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].chars().count(), 5);
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_split_prefers_newlines() {
    let text = "aaa\nbbb\nccc";
    let chunks = split_text(text, 6);
    assert_eq!(chunks, vec!["aaa\n", "bbb\n", "ccc"]);
}

#[test]
fn test_build_text_only() {
    let msgs = build_messages(&ReplyPayload::text("hi"));
    assert_eq!(
        msgs,
        vec![OutMessage::Text {
            text: "hi".into()
        }]
    );
}

#[test]
fn test_build_text_then_image() {
    let msgs = build_messages(&ReplyPayload::with_image(
        "นี่คือภาพตัวอย่างครับ",
        "https://img.example/a.png",
    ));
    assert_eq!(msgs.len(), 2);
    assert!(matches!(msgs[0], OutMessage::Text { .. }));
    assert_eq!(
        msgs[1],
        OutMessage::Image {
            original_content_url: "https://img.example/a.png".into(),
            preview_image_url: "https://img.example/a.png".into(),
        }
    );
    let json = serde_json::to_value(&msgs[1]).unwrap();
    assert_eq!(json["type"], "image");
    assert_eq!(json["originalContentUrl"], "https://img.example/a.png");
    assert_eq!(json["previewImageUrl"], "https://img.example/a.png");
}

#[test]
fn test_build_caps_message_count() {
    let long = "x".repeat(MAX_TEXT_CHARS * 7);
    let msgs = build_messages(&ReplyPayload::text(long.clone()));
    assert_eq!(msgs.len(), MAX_MESSAGES);

    let msgs = build_messages(&ReplyPayload::with_image(long, "https://img/1.png"));
    assert_eq!(msgs.len(), MAX_MESSAGES);
    assert!(matches!(msgs.last(), Some(OutMessage::Image { .. })));
}

#[test]
fn test_build_skips_empty_text() {
    assert!(build_messages(&ReplyPayload::text("")).is_empty());
}

// --- channel ---

fn channel(api_base_url: &str) -> LineChannel {
    LineChannel::new(ranbot_core::config::LineConfig {
        channel_access_token: "token".into(),
        channel_secret: SECRET.into(),
        api_base_url: api_base_url.into(),
        ..Default::default()
    })
}

#[test]
fn test_channel_exposes_secret() {
    let ch = channel("https://api.line.me/");
    assert_eq!(ch.channel_secret(), SECRET);
    assert_eq!(ch.name(), "line");
}

#[tokio::test]
async fn test_reply_unreachable_is_channel_error() {
    let ch = channel("http://127.0.0.1:9");
    let err = ch
        .reply("tok", &ReplyPayload::text("hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, RanbotError::Channel(_)));
}

#[tokio::test]
async fn test_reply_with_nothing_to_send_is_ok() {
    let ch = channel("http://127.0.0.1:9");
    assert!(ch.reply("tok", &ReplyPayload::text("")).await.is_ok());
}
