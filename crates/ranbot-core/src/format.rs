//! Deterministic renderers from records to reply or prompt text.
//!
//! Every output is a header line followed by one line per record entry, in
//! input order. Each line ends with `\n`, so `lines().count()` is always
//! `1 + entries`.

use crate::locale::Locale;
use crate::records::{DailySalesRecord, IngredientStock};

/// Sales report for the day, sent to the user as-is.
pub fn format_daily_sales_summary(record: &DailySalesRecord, locale: Locale) -> String {
    with_sale_lines(locale.sales_header(&record.date), record, locale)
}

/// Remaining stock report, sent to the user as-is.
pub fn format_ingredient_stock(stock: &IngredientStock, locale: Locale) -> String {
    let mut out = line(locale.stock_header());
    for ingredient in &stock.ingredients {
        out.push_str(&line(&locale.stock_line(ingredient)));
    }
    out
}

/// Prompt asking the text backend for growth advice based on the day's sales.
pub fn format_growth_advice_prompt(record: &DailySalesRecord, locale: Locale) -> String {
    with_sale_lines(locale.growth_header(&record.date), record, locale)
}

/// Prompt asking the text backend for a new dish from the remaining stock.
pub fn format_menu_generation_prompt(stock: &IngredientStock, locale: Locale) -> String {
    let mut out = line(locale.menu_header());
    for ingredient in &stock.ingredients {
        out.push_str(&line(&locale.menu_line(ingredient)));
    }
    out
}

fn with_sale_lines(header: String, record: &DailySalesRecord, locale: Locale) -> String {
    let mut out = line(&header);
    for (i, sale) in record.sales.iter().enumerate() {
        out.push_str(&line(&locale.sale_line(i + 1, sale)));
    }
    out
}

fn line(text: &str) -> String {
    format!("{text}\n")
}
