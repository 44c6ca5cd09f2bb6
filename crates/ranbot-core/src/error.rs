use thiserror::Error;

/// Top-level error type for ranbot.
#[derive(Debug, Error)]
pub enum RanbotError {
    /// Mock/static business data is missing or unreadable.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Error from a generative text or image backend.
    #[error("backend error: {0}")]
    Backend(String),

    /// Webhook signature did not match the channel secret.
    #[error("invalid webhook signature")]
    InvalidSignature,

    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
