//! Built-in keyword lists, one per rule group of the intent classifier.
//!
//! Lists are bilingual (Thai and English) and lower-case. A `[keywords]`
//! table in the config file replaces any of them wholesale.

/// Phrases asking for a generated picture.
pub(crate) const IMAGE_KW: &[&str] = &[
    "picture",
    "photo",
    "image",
    // th
    "รูปภาพ",
    "ขอรูป",
];

/// Phrases asking how to grow sales or profit.
///
/// "มากขึ้น" ("more") is short and also matches unrelated text.
pub(crate) const GROWTH_KW: &[&str] = &[
    "increase sales",
    "increase profit",
    "more profit",
    "grow sales",
    "boost sales",
    // th
    "จะทำยังไงให้ยอดการขายนั้นเพิ่มขึ้น",
    "กำไรมากขึ้น",
    "มากขึ้น",
    "ทำยังไงให้ยอดการขายเพิ่มขึ้น",
    "จะเพิ่มยอดการขายอย่างไร",
    "จะทำยังไงให้สร้างกำไรเพิ่มมากขึ้น",
];

/// Phrases asking for a new dish from leftover ingredients.
pub(crate) const MENU_KW: &[&str] = &[
    "generate menu",
    "create menu",
    "new menu",
    // th
    "เมนูใหม่",
    "สร้างเมนู",
    "สร้างเมนูใหม่",
    "สร้างเมนูใหม่จากส่วนผสมที่คงเหลือ",
    "จะจัดการกับของเหลืออย่างไร",
    "จะจัดการกับวัตถุดิบที่เหลือได้อย่างไร",
];

/// Phrases asking for today's sales report.
pub(crate) const SALES_KW: &[&str] = &[
    "sales report",
    "sales summary",
    "daily sales",
    "today's sales",
    // th
    "ยอดการขาย",
    "สรุปยอด",
    "วันนี้ขายไปเท่าไร",
];

/// Phrases asking about remaining stock.
pub(crate) const STOCK_KW: &[&str] = &[
    "stock",
    "ingredient",
    "inventory",
    // th
    "คงเหลือ",
    "สต็อก",
    "อาหาร",
    "วัตถุดิบ",
    "จำนวนวัตถุดิบคงเหลือ",
];
