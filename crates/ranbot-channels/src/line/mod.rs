//! LINE Messaging API channel.
//!
//! Inbound events arrive on a webhook signed with the channel secret; answers
//! go out through the reply API using the event's reply token.
//! Docs: <https://developers.line.biz/en/reference/messaging-api/>

pub(crate) mod send;
mod signature;
pub(crate) mod types;
mod webhook;

#[cfg(test)]
mod tests;

pub use signature::{sign, verify_signature, SIGNATURE_HEADER};
pub use webhook::parse_webhook;

use ranbot_core::config::LineConfig;

/// LINE channel replying through the Messaging API.
pub struct LineChannel {
    config: LineConfig,
    client: reqwest::Client,
    base_url: String,
}

impl LineChannel {
    /// Create a new LINE channel from config.
    pub fn new(config: LineConfig) -> Self {
        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// HMAC key for incoming webhook signatures.
    pub fn channel_secret(&self) -> &str {
        &self.config.channel_secret
    }
}
