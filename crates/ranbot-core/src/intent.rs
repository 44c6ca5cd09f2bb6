//! Intent classification by ordered, case-insensitive substring matching.
//!
//! Rule groups are checked in a fixed priority order and the first group with
//! any matching keyword wins. Matching is plain containment on the lower-cased
//! query, so short keywords can match inside unrelated words.

use crate::config::KeywordConfig;
use crate::keywords_data::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    DailySalesSummary,
    IngredientStockSummary,
    ImageRequest,
    GrowthAdvice,
    MenuGeneration,
    GeneralQuestion,
}

impl Intent {
    /// Stable snake_case name, used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailySalesSummary => "daily_sales_summary",
            Self::IngredientStockSummary => "ingredient_stock_summary",
            Self::ImageRequest => "image_request",
            Self::GrowthAdvice => "growth_advice",
            Self::MenuGeneration => "menu_generation",
            Self::GeneralQuestion => "general_question",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword lists for every rule group, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    image: Vec<String>,
    growth: Vec<String>,
    menu: Vec<String>,
    sales: Vec<String>,
    stock: Vec<String>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            image: normalize(IMAGE_KW.iter().copied()),
            growth: normalize(GROWTH_KW.iter().copied()),
            menu: normalize(MENU_KW.iter().copied()),
            sales: normalize(SALES_KW.iter().copied()),
            stock: normalize(STOCK_KW.iter().copied()),
        }
    }
}

impl KeywordTable {
    /// Built-in lists, with every list present in `overrides` replacing its default.
    pub fn with_overrides(overrides: &KeywordConfig) -> Self {
        let mut table = Self::default();
        let slots = [
            (&mut table.image, &overrides.image),
            (&mut table.growth, &overrides.growth),
            (&mut table.menu, &overrides.menu),
            (&mut table.sales, &overrides.sales),
            (&mut table.stock, &overrides.stock),
        ];
        for (slot, custom) in slots {
            if let Some(list) = custom {
                *slot = normalize(list.iter().map(String::as_str));
            }
        }
        table
    }

    /// Rule groups in priority order. `GeneralQuestion` is the implicit fallback.
    pub fn rules(&self) -> [(Intent, &[String]); 5] {
        [
            (Intent::ImageRequest, self.image.as_slice()),
            (Intent::GrowthAdvice, self.growth.as_slice()),
            (Intent::MenuGeneration, self.menu.as_slice()),
            (Intent::DailySalesSummary, self.sales.as_slice()),
            (Intent::IngredientStockSummary, self.stock.as_slice()),
        ]
    }

    /// Keywords for one intent (empty for `GeneralQuestion`).
    pub fn keywords(&self, intent: Intent) -> &[String] {
        match intent {
            Intent::ImageRequest => self.image.as_slice(),
            Intent::GrowthAdvice => self.growth.as_slice(),
            Intent::MenuGeneration => self.menu.as_slice(),
            Intent::DailySalesSummary => self.sales.as_slice(),
            Intent::IngredientStockSummary => self.stock.as_slice(),
            Intent::GeneralQuestion => &[],
        }
    }
}

/// Lower-case and trim keywords, dropping blanks (a blank keyword would match every query).
fn normalize<'a>(keywords: impl Iterator<Item = &'a str>) -> Vec<String> {
    keywords
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect()
}

/// Check if any keyword in the list is contained in the lowercased message.
fn kw_match(msg_lower: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| msg_lower.contains(kw.as_str()))
}

/// Classify a raw query. Total: every input maps to exactly one intent.
pub fn classify(query: &str, table: &KeywordTable) -> Intent {
    let lower = query.to_lowercase();
    table
        .rules()
        .into_iter()
        .find(|(_, keywords)| kw_match(&lower, keywords))
        .map(|(intent, _)| intent)
        .unwrap_or(Intent::GeneralQuestion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> KeywordTable {
        KeywordTable::default()
    }

    #[test]
    fn test_empty_query_is_general_question() {
        assert_eq!(classify("", &table()), Intent::GeneralQuestion);
    }

    #[test]
    fn test_unmatched_query_is_general_question() {
        assert_eq!(
            classify("what time do you open?", &table()),
            Intent::GeneralQuestion
        );
    }

    #[test]
    fn test_sales_report() {
        assert_eq!(classify("sales report", &table()), Intent::DailySalesSummary);
        assert_eq!(
            classify("วันนี้ขายไปเท่าไร", &table()),
            Intent::DailySalesSummary
        );
    }

    #[test]
    fn test_picture_request() {
        assert_eq!(
            classify("show me a picture of a cat", &table()),
            Intent::ImageRequest
        );
    }

    #[test]
    fn test_growth_advice() {
        assert_eq!(
            classify("how to increase sales", &table()),
            Intent::GrowthAdvice
        );
        assert_eq!(
            classify("จะเพิ่มยอดการขายอย่างไร", &table()),
            Intent::GrowthAdvice
        );
    }

    #[test]
    fn test_menu_generation() {
        assert_eq!(
            classify("please create menu for tonight", &table()),
            Intent::MenuGeneration
        );
        assert_eq!(classify("ขอเมนูใหม่หน่อย", &table()), Intent::MenuGeneration);
    }

    #[test]
    fn test_stock_summary() {
        assert_eq!(
            classify("how much stock is left", &table()),
            Intent::IngredientStockSummary
        );
        assert_eq!(
            classify("วัตถุดิบเหลือเท่าไร", &table()),
            Intent::IngredientStockSummary
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("SALES REPORT", &table()), Intent::DailySalesSummary);
        assert_eq!(classify("A PhOtO please", &table()), Intent::ImageRequest);
    }

    #[test]
    fn test_matching_is_substring_not_word_boundary() {
        // "photography" contains "photo"; a known precision limit of containment matching.
        assert_eq!(classify("photography tips", &table()), Intent::ImageRequest);
        assert_eq!(classify("restocking", &table()), Intent::IngredientStockSummary);
    }

    #[test]
    fn test_image_beats_growth() {
        assert_eq!(
            classify("a picture about how to increase sales", &table()),
            Intent::ImageRequest
        );
    }

    #[test]
    fn test_full_priority_order() {
        // Every lower group's keyword is present; each step removes the winner.
        let t = table();
        assert_eq!(
            classify("photo increase sales new menu sales report stock", &t),
            Intent::ImageRequest
        );
        assert_eq!(
            classify("increase sales new menu sales report stock", &t),
            Intent::GrowthAdvice
        );
        assert_eq!(
            classify("new menu sales report stock", &t),
            Intent::MenuGeneration
        );
        assert_eq!(
            classify("sales report stock", &t),
            Intent::DailySalesSummary
        );
        assert_eq!(classify("stock", &t), Intent::IngredientStockSummary);
    }

    #[test]
    fn test_every_default_keyword_hits_its_group() {
        let t = table();
        for (intent, keywords) in t.rules() {
            for kw in keywords {
                let got = classify(&kw.to_uppercase(), &t);
                // A keyword may also contain a higher-priority keyword; then that group wins.
                let higher = t
                    .rules()
                    .into_iter()
                    .take_while(|(i, _)| *i != intent)
                    .any(|(_, kws)| kw_match(kw, kws));
                if !higher {
                    assert_eq!(got, intent, "keyword {kw:?}");
                }
            }
        }
    }

    #[test]
    fn test_overrides_replace_only_given_lists() {
        let overrides = KeywordConfig {
            image: Some(vec!["  DRAW ".into(), "".into()]),
            ..Default::default()
        };
        let t = KeywordTable::with_overrides(&overrides);
        assert_eq!(t.keywords(Intent::ImageRequest), ["draw".to_string()]);
        assert_eq!(classify("draw a noodle bowl", &t), Intent::ImageRequest);
        assert_eq!(classify("a picture", &t), Intent::GeneralQuestion);
        assert_eq!(classify("sales report", &t), Intent::DailySalesSummary);
    }

    #[test]
    fn test_blank_override_never_matches_everything() {
        let overrides = KeywordConfig {
            growth: Some(vec!["   ".into()]),
            ..Default::default()
        };
        let t = KeywordTable::with_overrides(&overrides);
        assert!(t.keywords(Intent::GrowthAdvice).is_empty());
        assert_eq!(classify("hello", &t), Intent::GeneralQuestion);
    }

    #[test]
    fn test_general_question_has_no_keywords() {
        assert!(table().keywords(Intent::GeneralQuestion).is_empty());
    }

    #[test]
    fn test_intent_display() {
        assert_eq!(Intent::GrowthAdvice.to_string(), "growth_advice");
    }
}
