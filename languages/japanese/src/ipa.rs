use std::collections::HashMap;
use std::path::Path;

use crate::loader::{from_pairs, load_tsv, word_key};

/// English pronunciation guide provider
pub struct IpaDictionary {
    transcriptions: HashMap<String, String>,
}

impl IpaDictionary {
    /// Create empty IPA dictionary
    pub fn new() -> Self {
        Self {
            transcriptions: HashMap::new(),
        }
    }

    /// Create with transcriptions for frequent passage words (General American)
    pub fn with_defaults() -> Self {
        let transcriptions = from_pairs(&[
            ("the", "ðə"),
            ("a", "ə"),
            ("an", "ən"),
            ("is", "ɪz"),
            ("are", "ɑɹ"),
            ("was", "wʌz"),
            ("i", "aɪ"),
            ("you", "ju"),
            ("he", "hi"),
            ("she", "ʃi"),
            ("we", "wi"),
            ("they", "ðeɪ"),
            ("it", "ɪt"),
            ("this", "ðɪs"),
            ("that", "ðæt"),
            ("where", "wɛɹ"),
            ("what", "wʌt"),
            ("when", "wɛn"),
            ("how", "haʊ"),
            ("and", "ænd"),
            ("to", "tu"),
            ("of", "ʌv"),
            ("in", "ɪn"),
            ("on", "ɑn"),
            ("at", "æt"),
            ("go", "ɡoʊ"),
            ("come", "kʌm"),
            ("eat", "it"),
            ("drink", "dɹɪŋk"),
            ("read", "ɹid"),
            ("write", "ɹaɪt"),
            ("book", "bʊk"),
            ("school", "skul"),
            ("teacher", "ˈtitʃɚ"),
            ("student", "ˈstudənt"),
            ("friend", "fɹɛnd"),
            ("family", "ˈfæməli"),
            ("house", "haʊs"),
            ("station", "ˈsteɪʃən"),
            ("train", "tɹeɪn"),
            ("water", "ˈwɔtɚ"),
            ("apple", "ˈæpəl"),
            ("coffee", "ˈkɔfi"),
            ("tea", "ti"),
            ("morning", "ˈmɔɹnɪŋ"),
            ("today", "təˈdeɪ"),
            ("weather", "ˈwɛðɚ"),
            ("happy", "ˈhæpi"),
            ("thank", "θæŋk"),
            ("please", "pliz"),
        ]);

        Self { transcriptions }
    }

    /// Load transcriptions from TSV file (word\tipa format)
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        Ok(Self {
            transcriptions: load_tsv(path)?,
        })
    }

    /// Add entries from another dictionary; later entries win
    pub fn merge(mut self, other: IpaDictionary) -> Self {
        self.transcriptions.extend(other.transcriptions);
        self
    }

    /// Raw transcription without slashes
    pub fn get(&self, word: &str) -> Option<&str> {
        self.transcriptions.get(&word_key(word)).map(String::as_str)
    }

    /// Transcription formatted as a guide, e.g. `/bʊk/`
    pub fn guide(&self, word: &str) -> Option<String> {
        self.get(word)
            .map(|ipa| format!("/{}/", ipa.trim_matches('/')))
    }

    pub fn len(&self) -> usize {
        self.transcriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcriptions.is_empty()
    }
}

impl Default for IpaDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guides_are_slash_delimited() {
        let ipa = IpaDictionary::with_defaults();
        assert_eq!(ipa.guide("Book.").as_deref(), Some("/bʊk/"));
        assert_eq!(ipa.guide("zeppelin"), None);
    }

    #[test]
    fn file_entries_with_slashes_are_not_doubled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ipa.tsv");
        std::fs::write(&path, "cat\t/kæt/\n").unwrap();

        let ipa = IpaDictionary::with_defaults().merge(IpaDictionary::load_from_file(&path).unwrap());
        assert_eq!(ipa.guide("cat").as_deref(), Some("/kæt/"));
        assert_eq!(ipa.guide("the").as_deref(), Some("/ðə/"));
    }
}
