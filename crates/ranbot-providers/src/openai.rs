//! OpenAI-compatible API provider.
//!
//! Speaks both the public OpenAI API and Azure OpenAI, and serves as the
//! text backend (chat completions) and the image backend (image generations).

use async_trait::async_trait;
use ranbot_core::{
    config::{ApiType, OpenAiConfig},
    error::RanbotError,
    traits::{ImageBackend, TextBackend},
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// OpenAI-compatible provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_type: ApiType,
    base_url: String,
    api_key: String,
    api_version: String,
    model: String,
    image_model: String,
    image_size: String,
    image_count: u32,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

/// Operations the provider calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    ChatCompletions,
    ImageGenerations,
    Models,
}

impl OpenAiProvider {
    /// Create from config values.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, RanbotError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RanbotError::Backend(format!("openai: failed to build client: {e}")))?;

        Ok(Self {
            client,
            api_type: config.api_type,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            model: config.model.clone(),
            image_model: config.image_model.clone(),
            image_size: config.image_size.clone(),
            image_count: config.image_count.max(1),
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
        })
    }

    fn url(&self, endpoint: Endpoint) -> String {
        let base = &self.base_url;
        match self.api_type {
            ApiType::OpenAi => match endpoint {
                Endpoint::ChatCompletions => format!("{base}/chat/completions"),
                Endpoint::ImageGenerations => format!("{base}/images/generations"),
                Endpoint::Models => format!("{base}/models"),
            },
            ApiType::Azure => {
                let version = &self.api_version;
                match endpoint {
                    Endpoint::ChatCompletions => format!(
                        "{base}/openai/deployments/{}/chat/completions?api-version={version}",
                        self.model
                    ),
                    Endpoint::ImageGenerations => format!(
                        "{base}/openai/deployments/{}/images/generations?api-version={version}",
                        self.image_model
                    ),
                    Endpoint::Models => format!("{base}/openai/models?api-version={version}"),
                }
            }
        }
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.api_type {
            ApiType::OpenAi => req.header("Authorization", format!("Bearer {}", self.api_key)),
            ApiType::Azure => req.header("api-key", &self.api_key),
        }
    }

    /// Azure routes by deployment, so the body carries no model there.
    fn body_model(&self, model: &str) -> Option<String> {
        match self.api_type {
            ApiType::OpenAi => Some(model.to_string()),
            ApiType::Azure => None,
        }
    }

    fn chat_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.body_model(&self.model),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }

    fn image_request(&self, prompt: &str) -> ImageGenerationRequest {
        ImageGenerationRequest {
            model: self.body_model(&self.image_model),
            prompt: prompt.to_string(),
            n: self.image_count,
            size: self.image_size.clone(),
        }
    }

    async fn post_json<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, RanbotError>
    where
        B: Serialize + ?Sized,
        R: for<'de> Deserialize<'de>,
    {
        let url = self.url(endpoint);
        debug!("openai: POST {url}");

        let resp = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await
            .map_err(|e| RanbotError::Backend(format!("openai request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(RanbotError::Backend(format!(
                "openai returned {status}: {text}"
            )));
        }

        resp.json()
            .await
            .map_err(|e| RanbotError::Backend(format!("openai: failed to parse response: {e}")))
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
pub(crate) struct ChatCompletionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Option<Vec<ChatChoice>>,
    pub model: Option<String>,
    pub usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub message: Option<ChatMessage>,
}

#[derive(Deserialize)]
pub(crate) struct ChatUsage {
    pub total_tokens: Option<u64>,
}

#[derive(Serialize)]
pub(crate) struct ImageGenerationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub prompt: String,
    pub n: u32,
    pub size: String,
}

#[derive(Deserialize)]
pub(crate) struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Deserialize)]
pub(crate) struct ImageData {
    pub url: Option<String>,
}

/// First choice's content, trimmed.
fn completion_text(parsed: &ChatCompletionResponse) -> Result<String, RanbotError> {
    parsed
        .choices
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| c.message.as_ref())
        .map(|m| m.content.trim().to_string())
        .ok_or_else(|| RanbotError::Backend("openai: response contained no choices".into()))
}

/// URL of the first generated image.
fn first_image_url(parsed: &ImageGenerationResponse) -> Result<String, RanbotError> {
    parsed
        .data
        .iter()
        .find_map(|d| d.url.clone())
        .ok_or_else(|| RanbotError::Backend("openai: response contained no image url".into()))
}

#[async_trait]
impl TextBackend for OpenAiProvider {
    fn name(&self) -> &str {
        match self.api_type {
            ApiType::OpenAi => "openai",
            ApiType::Azure => "azure-openai",
        }
    }

    async fn complete(&self, prompt: &str) -> Result<String, RanbotError> {
        let start = Instant::now();
        let body = self.chat_request(prompt);
        let parsed: ChatCompletionResponse = self.post_json(Endpoint::ChatCompletions, &body).await?;
        let text = completion_text(&parsed)?;

        debug!(
            "openai: completion model={} tokens={:?} in {}ms",
            parsed.model.as_deref().unwrap_or(&self.model),
            parsed.usage.as_ref().and_then(|u| u.total_tokens),
            start.elapsed().as_millis()
        );
        Ok(text)
    }

    async fn is_available(&self) -> bool {
        if self.api_key.is_empty() {
            warn!("openai: no API key configured");
            return false;
        }
        let url = self.url(Endpoint::Models);
        match self.authorize(self.client.get(&url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("openai not available: {e}");
                false
            }
        }
    }
}

#[async_trait]
impl ImageBackend for OpenAiProvider {
    fn name(&self) -> &str {
        TextBackend::name(self)
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, RanbotError> {
        let body = self.image_request(prompt);
        let parsed: ImageGenerationResponse =
            self.post_json(Endpoint::ImageGenerations, &body).await?;
        let url = first_image_url(&parsed)?;
        debug!("openai: {} image(s) generated", parsed.data.len());
        Ok(url)
    }
}
