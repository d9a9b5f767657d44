use serde::{Deserialize, Serialize};

fn default_style() -> String {
    "suffix".to_string()
}

fn default_suffix() -> String {
    "bak".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BackupConfig {
    /// `suffix`, `timestamp`, `none`, or `tag:<name>`
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            suffix: default_suffix(),
        }
    }
}
