use std::collections::HashMap;
use std::path::Path;

use tango_core::fix::{Fix, FixReport};
use tango_types::VocabEntry;

use crate::loader::{from_pairs, load_tsv, word_key};

/// English word to Japanese meaning
pub struct Glossary {
    meanings: HashMap<String, String>,
}

impl Glossary {
    /// Create empty glossary
    pub fn new() -> Self {
        Self {
            meanings: HashMap::new(),
        }
    }

    /// Create with a basic everyday vocabulary
    pub fn with_defaults() -> Self {
        let meanings = from_pairs(&[
            ("apple", "りんご"),
            ("banana", "バナナ"),
            ("water", "水"),
            ("tea", "お茶"),
            ("coffee", "コーヒー"),
            ("bread", "パン"),
            ("rice", "ご飯"),
            ("book", "本"),
            ("pen", "ペン"),
            ("desk", "机"),
            ("chair", "椅子"),
            ("school", "学校"),
            ("teacher", "先生"),
            ("student", "学生"),
            ("friend", "友達"),
            ("family", "家族"),
            ("house", "家"),
            ("station", "駅"),
            ("train", "電車"),
            ("bus", "バス"),
            ("car", "車"),
            ("airport", "空港"),
            ("ticket", "切符"),
            ("money", "お金"),
            ("shop", "店"),
            ("market", "市場"),
            ("hospital", "病院"),
            ("doctor", "医者"),
            ("medicine", "薬"),
            ("weather", "天気"),
            ("rain", "雨"),
            ("snow", "雪"),
            ("sun", "太陽"),
            ("tree", "木"),
            ("flower", "花"),
            ("dog", "犬"),
            ("cat", "猫"),
            ("time", "時間"),
            ("day", "日"),
            ("today", "今日"),
            ("tomorrow", "明日"),
            ("yesterday", "昨日"),
            ("happy", "幸せな"),
            ("sad", "悲しい"),
            ("big", "大きい"),
            ("small", "小さい"),
            ("new", "新しい"),
            ("old", "古い"),
            ("eat", "食べる"),
            ("drink", "飲む"),
            ("go", "行く"),
            ("come", "来る"),
            ("see", "見る"),
            ("read", "読む"),
            ("write", "書く"),
            ("speak", "話す"),
            ("listen", "聞く"),
            ("study", "勉強する"),
            ("work", "働く"),
            ("the", "その"),
            ("is", "です"),
            ("where", "どこ"),
        ]);

        Self { meanings }
    }

    /// Load meanings from TSV file (word\tmeaning format)
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        Ok(Self {
            meanings: load_tsv(path)?,
        })
    }

    /// Add entries from another glossary; later entries win
    pub fn merge(mut self, other: Glossary) -> Self {
        self.meanings.extend(other.meanings);
        self
    }

    pub fn meaning(&self, word: &str) -> Option<&str> {
        self.meanings.get(&word_key(word)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.meanings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty()
    }
}

impl Default for Glossary {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills empty meanings from the glossary
pub struct MeaningFix<'a> {
    pub glossary: &'a Glossary,
}

impl Fix for MeaningFix<'_> {
    fn name(&self) -> &str {
        "meanings"
    }

    fn apply(&self, entries: &mut Vec<VocabEntry>) -> FixReport {
        let mut report = FixReport::new(self.name());

        for entry in entries.iter_mut().filter(|e| e.meaning.trim().is_empty()) {
            match self.glossary.meaning(&entry.headword) {
                Some(meaning) => {
                    report.sample(format!("{}: {meaning}", entry.headword));
                    entry.meaning = meaning.to_string();
                    report.changed += 1;
                }
                None => report.skipped += 1,
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_only_missing_meanings() {
        let glossary = Glossary::with_defaults();
        let fix = MeaningFix { glossary: &glossary };
        let mut entries = vec![
            VocabEntry::from_fields(&["Dog", "ドッグ", ""]),
            VocabEntry::from_fields(&["cat", "キャット", "ねこ"]),
            VocabEntry::from_fields(&["zeppelin", "ツェッペリン", ""]),
        ];

        let report = fix.apply(&mut entries);
        assert_eq!(entries[0].meaning, "犬");
        assert_eq!(entries[1].meaning, "ねこ");
        assert_eq!(entries[2].meaning, "");
        assert_eq!((report.changed, report.skipped), (1, 1));
    }
}
