//! Localized reply wording.
//!
//! One `Locale` drives every user-visible string the core produces.

use crate::records::{Ingredient, Sale};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported reply languages. Thai is the default market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en", alias = "english")]
    English,
    #[default]
    #[serde(rename = "th", alias = "thai")]
    Thai,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "th" | "thai" => Ok(Self::Thai),
            other => Err(format!("unsupported locale '{other}', expected 'en' or 'th'")),
        }
    }
}

impl Locale {
    /// Short code as written in config.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Thai => "th",
        }
    }

    /// Text sent ahead of a generated image.
    pub fn image_caption(&self) -> &'static str {
        match self {
            Self::English => "Here is the picture",
            Self::Thai => "นี่คือภาพตัวอย่างครับ",
        }
    }

    /// Reply sent on the messaging platform when a request fails.
    pub fn apology(&self) -> &'static str {
        match self {
            Self::English => "Sorry, I can't answer that right now. Please try again later.",
            Self::Thai => "ขออภัยครับ ตอนนี้ระบบยังตอบคำถามนี้ไม่ได้ กรุณาลองใหม่อีกครั้ง",
        }
    }

    pub(crate) fn sales_header(&self, date: &str) -> String {
        match self {
            Self::English => format!("Your sales on {date} were as follows:"),
            Self::Thai => format!("ยอดการขายของคุณในวันที่ {date} นั้นมีดังนี้:"),
        }
    }

    pub(crate) fn growth_header(&self, date: &str) -> String {
        match self {
            Self::English => format!("How to make more profits from the sales on {date}:"),
            Self::Thai => format!("How to make more profits จากข้อมูลในวัน {date}:"),
        }
    }

    /// Enumerated sale line; `index` is 1-based.
    pub(crate) fn sale_line(&self, index: usize, sale: &Sale) -> String {
        let Sale {
            item,
            quantity,
            revenue,
        } = sale;
        match self {
            Self::English => {
                format!("{index}. {item}: sold {quantity} dishes, revenue {revenue} baht")
            }
            Self::Thai => format!("{index}. {item}: ขายได้ {quantity} จาน, รายได้ {revenue} บาท"),
        }
    }

    pub(crate) fn stock_header(&self) -> &'static str {
        match self {
            Self::English => "Remaining stock summary:",
            Self::Thai => "สรุปยอดสต็อกคงเหลือได้ดังนี้:",
        }
    }

    pub(crate) fn stock_line(&self, ingredient: &Ingredient) -> String {
        let Ingredient { name, quantity } = ingredient;
        match self {
            Self::English => format!("- {name}: {quantity} kg left"),
            Self::Thai => format!("- {name} คงเหลือ {quantity} กิโลกรัม"),
        }
    }

    pub(crate) fn menu_header(&self) -> &'static str {
        match self {
            Self::English => "Create a new menu from the remaining ingredients:",
            Self::Thai => "สร้างเมนูใหม่จากส่วนผสมที่คงเหลือ:",
        }
    }

    pub(crate) fn menu_line(&self, ingredient: &Ingredient) -> String {
        let Ingredient { name, quantity } = ingredient;
        match self {
            Self::English => format!("- {name}: {quantity} kg"),
            Self::Thai => format!("- {name}: {quantity} กิโลกรัม"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::English));
        assert_eq!(" Thai ".parse::<Locale>(), Ok(Locale::Thai));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde_codes() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let w: Wrapper = toml::from_str(r#"locale = "en""#).unwrap();
        assert_eq!(w.locale, Locale::English);
        let w: Wrapper = toml::from_str(r#"locale = "thai""#).unwrap();
        assert_eq!(w.locale, Locale::Thai);
    }

    #[test]
    fn test_default_is_thai() {
        assert_eq!(Locale::default(), Locale::Thai);
        assert_eq!(Locale::default().code(), "th");
    }

    #[test]
    fn test_captions() {
        assert_eq!(Locale::English.image_caption(), "Here is the picture");
        assert_eq!(Locale::Thai.image_caption(), "นี่คือภาพตัวอย่างครับ");
    }

    #[test]
    fn test_thai_sale_line_matches_legacy_wording() {
        let sale = Sale {
            item: "ข้าวผัด".into(),
            quantity: 12,
            revenue: 600.0,
        };
        assert_eq!(
            Locale::Thai.sale_line(1, &sale),
            "1. ข้าวผัด: ขายได้ 12 จาน, รายได้ 600 บาท"
        );
    }
}
