use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider")]
    pub default: String,
    pub openai: Option<OpenAiConfig>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default: default_provider(),
            openai: None,
        }
    }
}

/// Which flavor of the OpenAI API the endpoint speaks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiType {
    /// api.openai.com or any compatible endpoint (bearer auth, model in body).
    #[default]
    #[serde(alias = "open_ai")]
    OpenAi,
    /// Azure OpenAI (deployment in path, `api-key` header, `api-version` query).
    Azure,
}

impl std::str::FromStr for ApiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "open_ai" => Ok(Self::OpenAi),
            "azure" => Ok(Self::Azure),
            other => Err(format!(
                "unsupported api type '{other}', expected 'openai' or 'azure'"
            )),
        }
    }
}

/// OpenAI-compatible provider config, serving both text and image generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_type: ApiType,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    /// Only sent for Azure.
    #[serde(default = "default_azure_api_version")]
    pub api_version: String,
    /// Chat model, or the deployment name on Azure.
    #[serde(default = "default_openai_model")]
    pub model: String,
    /// Image model, or the image deployment name on Azure.
    #[serde(default = "default_openai_image_model")]
    pub image_model: String,
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// Images requested per call; only the first is used.
    #[serde(default = "default_image_count")]
    pub image_count: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Per-request HTTP timeout.
    #[serde(default = "default_request_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_type: ApiType::default(),
            api_key: String::new(),
            base_url: default_openai_base_url(),
            api_version: default_azure_api_version(),
            model: default_openai_model(),
            image_model: default_openai_image_model(),
            image_size: default_image_size(),
            image_count: default_image_count(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_request_timeout_secs(),
        }
    }
}
