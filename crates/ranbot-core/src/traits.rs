use crate::{
    error::RanbotError,
    message::ReplyPayload,
    records::{DailySalesRecord, IngredientStock},
};
use async_trait::async_trait;

/// Generative text backend: answers free-form prompts.
///
/// Fails with `RanbotError::Backend` on network failure, timeout, or a
/// non-success response.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Complete a prompt and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, RanbotError>;

    /// Check if the backend is reachable and configured.
    async fn is_available(&self) -> bool;
}

/// Generative image backend: turns a prompt into a hosted image URL.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    fn name(&self) -> &str;

    async fn generate_image(&self, prompt: &str) -> Result<String, RanbotError>;
}

/// Provider of business records. Each call loads fresh data.
///
/// Fails with `RanbotError::DataUnavailable` when the backing store is
/// missing or malformed.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load_daily_sales(&self) -> Result<DailySalesRecord, RanbotError>;

    async fn load_ingredient_stock(&self) -> Result<IngredientStock, RanbotError>;
}

/// Messaging channel that delivers a composed reply.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Send `payload` as the answer addressed by `reply_target`.
    async fn reply(&self, reply_target: &str, payload: &ReplyPayload) -> Result<(), RanbotError>;
}
