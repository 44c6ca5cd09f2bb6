//! Backend factory: builds the configured generative backends and the composer.

use ranbot_core::{
    compose::Composer,
    config,
    data::JsonFileSource,
    intent::KeywordTable,
    traits::{ImageBackend, TextBackend},
};
use ranbot_providers::openai::OpenAiProvider;
use std::sync::Arc;

/// Build the configured text and image backends.
pub fn build_backends(
    cfg: &config::Config,
) -> anyhow::Result<(Arc<dyn TextBackend>, Arc<dyn ImageBackend>)> {
    match cfg.provider.default.as_str() {
        "openai" => {
            let oc = cfg
                .provider
                .openai
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("provider.openai section missing in config"))?;
            if oc.api_key.is_empty() {
                anyhow::bail!(
                    "provider.openai has no api_key. Set it in config.toml or the OPENAI_KEY env var."
                );
            }
            let provider = Arc::new(OpenAiProvider::from_config(oc)?);
            Ok((provider.clone(), provider))
        }
        other => anyhow::bail!("unsupported provider: {other}"),
    }
}

/// Wire backends, keyword table, and the JSON data source into a composer.
pub fn build_composer(cfg: &config::Config) -> anyhow::Result<Composer> {
    let (text, image) = build_backends(cfg)?;
    let keywords = KeywordTable::with_overrides(&cfg.keywords);
    let data = Arc::new(JsonFileSource::from_config(&cfg.data));
    Ok(Composer::new(keywords, cfg.app.locale, text, image, data))
}
