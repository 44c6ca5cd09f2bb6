use serde::{Deserialize, Serialize};

/// Per-intent keyword overrides. A present list replaces the built-in one.
///
/// ```toml
/// [keywords]
/// image = ["picture", "photo", "รูปภาพ"]
/// stock = ["stock", "วัตถุดิบ"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub image: Option<Vec<String>>,
    #[serde(default)]
    pub growth: Option<Vec<String>>,
    #[serde(default)]
    pub menu: Option<Vec<String>>,
    #[serde(default)]
    pub sales: Option<Vec<String>>,
    #[serde(default)]
    pub stock: Option<Vec<String>>,
}
