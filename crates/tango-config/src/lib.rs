use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::backup::BackupConfig;
use self::dictionary::DictionaryConfig;
use self::taxonomy::TaxonomyConfig;
use self::validation::ValidationConfig;

pub mod backup;
pub mod dictionary;
pub mod taxonomy;
pub mod validation;

/// Profile file looked up inside the data directory
pub const PROFILE_FILE: &str = "tango.json";

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for input files when none are named
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub log_format: String,

    pub backup: BackupConfig,
    pub taxonomy: TaxonomyConfig,
    pub dictionary: DictionaryConfig,
    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_filter: default_log_filter(),
            log_format: default_log_format(),
            backup: BackupConfig::default(),
            taxonomy: TaxonomyConfig::default(),
            dictionary: DictionaryConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Defaults, then the JSON profile if one exists, then environment variables
    pub fn load() -> std::io::Result<Self> {
        Self::load_with(None)
    }

    /// Like `load`, with a data directory given on the command line. It locates
    /// `tango.json` and wins over `TANGO_DATA_DIR`.
    pub fn load_with(data_dir: Option<&Path>) -> std::io::Result<Self> {
        Self::load_from(data_dir, |key| env::var(key).ok())
    }

    fn load_from(
        data_dir: Option<&Path>,
        var: impl Fn(&str) -> Option<String>,
    ) -> std::io::Result<Self> {
        let profile = Self::profile_path(data_dir, &var);

        let mut config = if profile.exists() {
            tracing::debug!("Loading profile {}", profile.display());
            Self::from_profile(&profile)?
        } else {
            Self::default()
        };

        config.apply_env(&var);
        if let Some(dir) = data_dir {
            config.data_dir = dir.display().to_string();
        }
        Ok(config)
    }

    /// Read a JSON profile; missing keys take their defaults
    pub fn from_profile(path: &Path) -> std::io::Result<Self> {
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// `TANGO_CONFIG` names the profile outright; otherwise it sits in the data directory
    fn profile_path(data_dir: Option<&Path>, var: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(path) = var("TANGO_CONFIG") {
            return PathBuf::from(path);
        }
        if let Some(dir) = data_dir {
            return dir.join(PROFILE_FILE);
        }
        let data_dir = var("TANGO_DATA_DIR").unwrap_or_else(default_data_dir);
        Path::new(&data_dir).join(PROFILE_FILE)
    }

    /// Apply overrides from a variable source (the process environment in practice)
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = var("TANGO_DATA_DIR") {
            self.data_dir = dir;
        }

        if let Some(filter) = var("TANGO_LOG").or_else(|| var("RUST_LOG")) {
            self.log_filter = filter;
        }

        if let Some(format) = var("TANGO_LOG_FORMAT") {
            self.log_format = format;
        }

        if let Some(style) = var("TANGO_BACKUP_STYLE") {
            self.backup.style = style;
        }

        if let Some(suffix) = var("TANGO_BACKUP_SUFFIX") {
            self.backup.suffix = suffix;
        }

        if let Some(path) = var("TANGO_READINGS") {
            self.dictionary.readings_path = Some(path);
        }

        if let Some(path) = var("TANGO_GLOSSARY") {
            self.dictionary.glossary_path = Some(path);
        }

        if let Some(path) = var("TANGO_IPA") {
            self.dictionary.ipa_path = Some(path);
        }

        if let Some(max) = var("TANGO_MAX_DIFFICULTY").and_then(|v| v.parse().ok()) {
            self.validation.max_difficulty = max;
        }
    }
}
