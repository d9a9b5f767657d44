use std::collections::HashMap;
use std::path::Path;

use tango_core::fix::{Fix, FixReport};
use tango_types::VocabEntry;

use crate::kana::{is_katakana, to_katakana};
use crate::loader::{from_pairs, load_tsv, word_key};

/// Known katakana readings for English headwords
pub struct ReadingDictionary {
    readings: HashMap<String, String>,
}

impl ReadingDictionary {
    /// Create empty reading dictionary
    pub fn new() -> Self {
        Self {
            readings: HashMap::new(),
        }
    }

    /// Create with common loanwords whose spelling does not transliterate well
    pub fn with_defaults() -> Self {
        let readings = from_pairs(&[
            ("apple", "アップル"),
            ("banana", "バナナ"),
            ("orange", "オレンジ"),
            ("coffee", "コーヒー"),
            ("tea", "ティー"),
            ("water", "ウォーター"),
            ("bread", "ブレッド"),
            ("ice cream", "アイスクリーム"),
            ("computer", "コンピューター"),
            ("internet", "インターネット"),
            ("email", "イーメール"),
            ("phone", "フォン"),
            ("camera", "カメラ"),
            ("television", "テレビジョン"),
            ("music", "ミュージック"),
            ("piano", "ピアノ"),
            ("guitar", "ギター"),
            ("teacher", "ティーチャー"),
            ("student", "スチューデント"),
            ("school", "スクール"),
            ("book", "ブック"),
            ("pen", "ペン"),
            ("table", "テーブル"),
            ("chair", "チェア"),
            ("house", "ハウス"),
            ("hotel", "ホテル"),
            ("station", "ステーション"),
            ("train", "トレイン"),
            ("bus", "バス"),
            ("taxi", "タクシー"),
            ("airport", "エアポート"),
            ("ticket", "チケット"),
            ("money", "マネー"),
            ("shop", "ショップ"),
            ("market", "マーケット"),
            ("hospital", "ホスピタル"),
            ("doctor", "ドクター"),
            ("nurse", "ナース"),
            ("medicine", "メディスン"),
            ("sport", "スポーツ"),
            ("soccer", "サッカー"),
            ("tennis", "テニス"),
            ("game", "ゲーム"),
            ("friend", "フレンド"),
            ("family", "ファミリー"),
            ("happy", "ハッピー"),
            ("weather", "ウェザー"),
            ("nature", "ネイチャー"),
            ("science", "サイエンス"),
            ("culture", "カルチャー"),
            ("business", "ビジネス"),
            ("office", "オフィス"),
            ("meeting", "ミーティング"),
        ]);

        Self { readings }
    }

    /// Load readings from TSV file (word\treading format)
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        Ok(Self {
            readings: load_tsv(path)?,
        })
    }

    /// Add entries from another dictionary; later entries win
    pub fn merge(mut self, other: ReadingDictionary) -> Self {
        self.readings.extend(other.readings);
        self
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.readings.get(&word_key(word)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl Default for ReadingDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds a katakana reading for a headword
pub struct ReadingFiller {
    dictionary: ReadingDictionary,
}

impl ReadingFiller {
    pub fn new(dictionary: ReadingDictionary) -> Self {
        Self { dictionary }
    }

    /// Dictionary first, then transliteration of the headword itself
    pub fn reading_for(&self, headword: &str) -> Option<String> {
        if let Some(reading) = self.dictionary.get(headword) {
            return Some(reading.to_string());
        }
        to_katakana(headword)
    }
}

/// Fills empty readings and converts hiragana/romaji readings to katakana
pub struct ReadingFix<'a> {
    pub filler: &'a ReadingFiller,
}

impl Fix for ReadingFix<'_> {
    fn name(&self) -> &str {
        "readings"
    }

    fn apply(&self, entries: &mut Vec<VocabEntry>) -> FixReport {
        let mut report = FixReport::new(self.name());

        for entry in entries.iter_mut() {
            let reading = entry.reading.trim();

            let replacement = if reading.is_empty() {
                self.filler.reading_for(&entry.headword)
            } else if is_katakana(reading) {
                continue;
            } else {
                to_katakana(reading)
            };

            match replacement {
                Some(katakana) => {
                    report.sample(format!("{}: {:?} -> {katakana}", entry.headword, entry.reading));
                    entry.reading = katakana;
                    report.changed += 1;
                }
                None => {
                    tracing::debug!("No katakana reading for {:?}", entry.headword);
                    report.skipped += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler() -> ReadingFiller {
        ReadingFiller::new(ReadingDictionary::with_defaults())
    }

    #[test]
    fn dictionary_beats_transliteration() {
        let filler = filler();
        assert_eq!(filler.reading_for("Coffee").as_deref(), Some("コーヒー"));
        assert_eq!(filler.reading_for("sakura").as_deref(), Some("サクラ"));
        assert_eq!(filler.reading_for("42"), None);
    }

    #[test]
    fn empty_reading_is_filled_or_left_empty() {
        let filler = filler();
        let fix = ReadingFix { filler: &filler };
        let mut entries = vec![
            VocabEntry::from_fields(&["apple", ""]),
            VocabEntry::from_fields(&["3D", ""]),
        ];

        let report = fix.apply(&mut entries);
        assert_eq!(entries[0].reading, "アップル");
        assert_eq!(entries[1].reading, "");
        assert_eq!(report.changed, 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn converts_but_never_touches_katakana() {
        let filler = filler();
        let fix = ReadingFix { filler: &filler };
        let mut entries = vec![
            VocabEntry::from_fields(&["apple", "あっぷる"]),
            VocabEntry::from_fields(&["tea", "ティー"]),
            VocabEntry::from_fields(&["pan", "pan"]),
        ];

        fix.apply(&mut entries);
        assert_eq!(entries[0].reading, "アップル");
        assert_eq!(entries[1].reading, "ティー");
        assert_eq!(entries[2].reading, "パン");

        let again = fix.apply(&mut entries);
        assert!(again.is_noop());
    }

    #[test]
    fn macron_romaji_reading_is_converted() {
        let filler = filler();
        let fix = ReadingFix { filler: &filler };
        let mut entries = vec![VocabEntry::from_fields(&["Tokyo", "tōkyō"])];

        let report = fix.apply(&mut entries);
        assert_eq!(entries[0].reading, "トーキョー");
        assert_eq!(report.changed, 1);
    }

    #[test]
    fn merge_prefers_later_entries() {
        let base = ReadingDictionary::with_defaults();
        let mut extra = ReadingDictionary::new();
        extra.readings.insert("tea".to_string(), "チー".to_string());

        let merged = base.merge(extra);
        assert_eq!(merged.get("TEA"), Some("チー"));
    }
}
