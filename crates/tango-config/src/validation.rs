use serde::{Deserialize, Serialize};

fn default_min_difficulty() -> u8 {
    1
}

fn default_max_difficulty() -> u8 {
    3
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ValidationConfig {
    #[serde(default = "default_min_difficulty")]
    pub min_difficulty: u8,
    #[serde(default = "default_max_difficulty")]
    pub max_difficulty: u8,
    /// Report readings that are not katakana
    #[serde(default = "default_true")]
    pub require_katakana: bool,
    /// Report categories outside the canonical taxonomy
    #[serde(default = "default_true")]
    pub require_known_category: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_difficulty: default_min_difficulty(),
            max_difficulty: default_max_difficulty(),
            require_katakana: default_true(),
            require_known_category: default_true(),
        }
    }
}
