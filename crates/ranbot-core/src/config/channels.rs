use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub line: Option<LineConfig>,
}

/// LINE Messaging API config.
///
/// Inbound events arrive on `POST /callback`; replies use the reply API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Long-lived channel access token (bearer for the reply API).
    #[serde(default)]
    pub channel_access_token: String,
    /// Channel secret, the HMAC key for `X-Line-Signature`.
    #[serde(default)]
    pub channel_secret: String,
    #[serde(default = "default_line_api_base_url")]
    pub api_base_url: String,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            channel_access_token: String::new(),
            channel_secret: String::new(),
            api_base_url: default_line_api_base_url(),
        }
    }
}
