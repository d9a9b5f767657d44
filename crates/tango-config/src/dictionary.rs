use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Lookup tables used to fill readings, meanings and IPA
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Use the built-in word lists in addition to the files below
    #[serde(default = "default_enabled")]
    pub builtin: bool,
    /// TSV of `word\treading`
    #[serde(default)]
    pub readings_path: Option<String>,
    /// TSV of `word\tmeaning`
    #[serde(default)]
    pub glossary_path: Option<String>,
    /// TSV of `word\tipa`
    #[serde(default)]
    pub ipa_path: Option<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            builtin: default_enabled(),
            readings_path: None,
            glossary_path: None,
            ipa_path: None,
        }
    }
}
