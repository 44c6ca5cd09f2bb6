//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "ranbot".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_provider() -> String {
    "openai".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_server_port() -> u16 {
    5000
}

pub fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

pub fn default_openai_image_model() -> String {
    "dall-e-2".to_string()
}

pub fn default_azure_api_version() -> String {
    "2024-02-01".to_string()
}

pub fn default_image_size() -> String {
    "512x512".to_string()
}

pub fn default_image_count() -> u32 {
    2
}

pub fn default_temperature() -> f32 {
    1.0
}

pub fn default_top_p() -> f32 {
    0.5
}

pub fn default_max_tokens() -> u32 {
    1000
}

pub fn default_request_timeout_secs() -> u64 {
    60
}

pub fn default_line_api_base_url() -> String {
    "https://api.line.me".to_string()
}

pub fn default_data_dir() -> String {
    "./data".to_string()
}

pub fn default_daily_sales_file() -> String {
    "mock_daily_sales.json".to_string()
}

pub fn default_ingredients_file() -> String {
    "mock_ingredients.json".to_string()
}
