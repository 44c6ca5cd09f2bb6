mod channels;
mod defaults;
mod keywords;
mod providers;


pub use channels::*;
pub use keywords::*;
pub use providers::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::RanbotError;
use crate::locale::Locale;
use defaults::*;

/// Top-level ranbot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub keywords: KeywordConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for daily-rolling log files. Unset = stdout only.
    #[serde(default)]
    pub log_dir: Option<String>,
    /// Language of canned replies and prompts.
    #[serde(default)]
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            log_dir: None,
            locale: Locale::default(),
        }
    }
}

/// HTTP server config for the webhook and query endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

/// Location of the static mock data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,
    #[serde(default = "default_daily_sales_file")]
    pub daily_sales_file: String,
    #[serde(default = "default_ingredients_file")]
    pub ingredients_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            daily_sales_file: default_daily_sales_file(),
            ingredients_file: default_ingredients_file(),
        }
    }
}

impl DataConfig {
    pub fn daily_sales_path(&self) -> PathBuf {
        Path::new(&shellexpand(&self.dir)).join(&self.daily_sales_file)
    }

    pub fn ingredients_path(&self) -> PathBuf {
        Path::new(&shellexpand(&self.dir)).join(&self.ingredients_file)
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, RanbotError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| RanbotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| RanbotError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}

impl Config {
    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), RanbotError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by the deployment's environment
    /// variable names. Empty values are ignored.
    ///
    /// Setting any `LINE_*` variable creates the `[channel.line]` section;
    /// any `OPENAI_*` variable creates `[provider.openai]`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), RanbotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = get("LINE_CHANNEL_ACCESS_TOKEN") {
            self.line_mut().channel_access_token = token;
        }
        if let Some(secret) = get("LINE_CHANNEL_SECRET") {
            self.line_mut().channel_secret = secret;
        }

        if let Some(kind) = get("OPENAI_TYPE") {
            self.openai_mut().api_type = kind
                .parse()
                .map_err(|e| RanbotError::Config(format!("OPENAI_TYPE: {e}")))?;
        }
        if let Some(base_url) = get("OPENAI_BASE_URL") {
            self.openai_mut().base_url = base_url;
        }
        if let Some(version) = get("OPENAI_VERSION") {
            self.openai_mut().api_version = version;
        }
        if let Some(key) = get("OPENAI_KEY") {
            self.openai_mut().api_key = key;
        }
        if let Some(engine) = get("OPENAI_COMPLETION_ENGINE") {
            self.openai_mut().model = engine;
        }
        if let Some(engine) = get("OPENAI_IMAGE_ENGINE") {
            self.openai_mut().image_model = engine;
        }

        if let Some(port) = get("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| RanbotError::Config(format!("PORT '{port}': {e}")))?;
        }
        if let Some(locale) = get("RANBOT_LOCALE") {
            self.app.locale = locale
                .parse()
                .map_err(|e| RanbotError::Config(format!("RANBOT_LOCALE: {e}")))?;
        }

        Ok(())
    }

    fn line_mut(&mut self) -> &mut LineConfig {
        self.channel.line.get_or_insert_with(LineConfig::default)
    }

    fn openai_mut(&mut self) -> &mut OpenAiConfig {
        self.provider.openai.get_or_insert_with(OpenAiConfig::default)
    }
}
