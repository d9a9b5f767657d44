use std::path::Path;

use tango_config::Config;
use tango_config::dictionary::DictionaryConfig;
use tango_core::taxonomy::Taxonomy;
use tango_lang_japanese::{Glossary, IpaDictionary, ReadingDictionary, ReadingFiller};

/// Lookup tables shared by the fix commands
pub struct Resources {
    pub taxonomy: Taxonomy,
    pub filler: ReadingFiller,
    pub glossary: Glossary,
    pub ipa: IpaDictionary,
}

impl Resources {
    /// Built-in tables merged with any configured files; a file that fails to load is skipped
    pub fn load(config: &Config) -> Self {
        let taxonomy = Taxonomy::from_config(&config.taxonomy).unwrap_or_else(|e| {
            tracing::warn!("Failed to load category aliases: {e}");
            let mut fallback = config.taxonomy.clone();
            fallback.aliases_path = None;
            Taxonomy::from_config(&fallback).unwrap_or_else(|_| Taxonomy::canonical())
        });

        Self {
            taxonomy,
            filler: ReadingFiller::new(readings(&config.dictionary)),
            glossary: glossary(&config.dictionary),
            ipa: ipa(&config.dictionary),
        }
    }
}

fn readings(config: &DictionaryConfig) -> ReadingDictionary {
    let mut dict = if config.builtin {
        ReadingDictionary::with_defaults()
    } else {
        ReadingDictionary::new()
    };

    if let Some(path) = &config.readings_path {
        match ReadingDictionary::load_from_file(Path::new(path)) {
            Ok(extra) => {
                tracing::info!("Merging {} readings from {}", extra.len(), path);
                dict = dict.merge(extra);
            }
            Err(e) => tracing::warn!("Failed to load readings from {}: {}", path, e),
        }
    }

    dict
}

fn glossary(config: &DictionaryConfig) -> Glossary {
    let mut glossary = if config.builtin {
        Glossary::with_defaults()
    } else {
        Glossary::new()
    };

    if let Some(path) = &config.glossary_path {
        match Glossary::load_from_file(Path::new(path)) {
            Ok(extra) => {
                tracing::info!("Merging {} meanings from {}", extra.len(), path);
                glossary = glossary.merge(extra);
            }
            Err(e) => tracing::warn!("Failed to load glossary from {}: {}", path, e),
        }
    }

    glossary
}

fn ipa(config: &DictionaryConfig) -> IpaDictionary {
    let mut ipa = if config.builtin {
        IpaDictionary::with_defaults()
    } else {
        IpaDictionary::new()
    };

    if let Some(path) = &config.ipa_path {
        match IpaDictionary::load_from_file(Path::new(path)) {
            Ok(extra) => {
                tracing::info!("Merging {} IPA entries from {}", extra.len(), path);
                ipa = ipa.merge(extra);
            }
            Err(e) => tracing::warn!("Failed to load IPA from {}: {}", path, e),
        }
    }

    ipa
}
