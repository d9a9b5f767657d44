use serde::{Deserialize, Serialize};

fn default_fallback() -> String {
    "その他".to_string()
}

fn default_delimiters() -> String {
    ";；、,，/／|｜・".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Label used when no token of a category cell is recognized
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// Characters that separate several categories in one cell
    #[serde(default = "default_delimiters")]
    pub delimiters: String,
    /// JSON object of extra `alias -> canonical label` pairs
    #[serde(default)]
    pub aliases_path: Option<String>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            delimiters: default_delimiters(),
            aliases_path: None,
        }
    }
}
