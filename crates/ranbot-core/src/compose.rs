//! Response composition: classify a query, gather what its intent needs, and
//! build the reply payload.
//!
//! One pass per request, no retries. Each request performs at most one data
//! load and at most one backend call; failures propagate untouched so the
//! transport layer decides how to surface them.

use crate::{
    error::RanbotError,
    format::{
        format_daily_sales_summary, format_growth_advice_prompt, format_ingredient_stock,
        format_menu_generation_prompt,
    },
    intent::{classify, Intent, KeywordTable},
    locale::Locale,
    message::ReplyPayload,
    traits::{DataSource, ImageBackend, TextBackend},
};
use std::sync::Arc;
use tracing::{debug, info};

/// A reply together with the intent that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    pub intent: Intent,
    pub payload: ReplyPayload,
}

/// Stateless across requests; share it behind an `Arc`.
pub struct Composer {
    keywords: KeywordTable,
    locale: Locale,
    text: Arc<dyn TextBackend>,
    image: Arc<dyn ImageBackend>,
    data: Arc<dyn DataSource>,
}

impl Composer {
    pub fn new(
        keywords: KeywordTable,
        locale: Locale,
        text: Arc<dyn TextBackend>,
        image: Arc<dyn ImageBackend>,
        data: Arc<dyn DataSource>,
    ) -> Self {
        Self {
            keywords,
            locale,
            text,
            image,
            data,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// The text backend, for transports that forward raw prompts.
    pub fn text_backend(&self) -> &dyn TextBackend {
        self.text.as_ref()
    }

    pub fn classify(&self, query: &str) -> Intent {
        classify(query, &self.keywords)
    }

    /// Classify `query` and compose its reply.
    pub async fn compose(&self, query: &str) -> Result<Composed, RanbotError> {
        let intent = self.classify(query);
        info!("compose: intent={intent}");
        let payload = self.compose_intent(intent, query).await?;
        Ok(Composed { intent, payload })
    }

    /// Compose the reply for an already-classified query.
    pub async fn compose_intent(
        &self,
        intent: Intent,
        query: &str,
    ) -> Result<ReplyPayload, RanbotError> {
        let locale = self.locale;
        match intent {
            Intent::ImageRequest => {
                debug!("compose: image backend {}", self.image.name());
                let url = self.image.generate_image(query).await?;
                Ok(ReplyPayload::with_image(locale.image_caption(), url))
            }
            Intent::GrowthAdvice => {
                let record = self.data.load_daily_sales().await?;
                let prompt = format_growth_advice_prompt(&record, locale);
                self.ask(&prompt).await
            }
            Intent::MenuGeneration => {
                let stock = self.data.load_ingredient_stock().await?;
                let prompt = format_menu_generation_prompt(&stock, locale);
                self.ask(&prompt).await
            }
            Intent::DailySalesSummary => {
                let record = self.data.load_daily_sales().await?;
                Ok(ReplyPayload::text(format_daily_sales_summary(
                    &record, locale,
                )))
            }
            Intent::IngredientStockSummary => {
                let stock = self.data.load_ingredient_stock().await?;
                Ok(ReplyPayload::text(format_ingredient_stock(&stock, locale)))
            }
            Intent::GeneralQuestion => self.ask(query).await,
        }
    }

    async fn ask(&self, prompt: &str) -> Result<ReplyPayload, RanbotError> {
        debug!(
            "compose: text backend {} ({} chars)",
            self.text.name(),
            prompt.chars().count()
        );
        let answer = self.text.complete(prompt).await?;
        Ok(ReplyPayload::text(answer))
    }
}
