use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of columns in a vocabulary CSV row
pub const COLUMN_COUNT: usize = 7;

/// Vocabulary CSV columns, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Headword,
    Reading,
    Meaning,
    Etymology,
    Related,
    Category,
    Difficulty,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Headword,
        Column::Reading,
        Column::Meaning,
        Column::Etymology,
        Column::Related,
        Column::Category,
        Column::Difficulty,
    ];

    /// Canonical Japanese header label
    pub fn header(&self) -> &'static str {
        match self {
            Column::Headword => "単語",
            Column::Reading => "読み",
            Column::Meaning => "意味",
            Column::Etymology => "語源",
            Column::Related => "関連語",
            Column::Category => "関連分野",
            Column::Difficulty => "難易度",
        }
    }

    /// Position in a canonical row
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Recognize a header cell, either the canonical label or an English alias
    pub fn from_header(label: &str) -> Option<Self> {
        let label = label.trim().trim_start_matches('\u{feff}');

        if let Some(column) = Self::ALL.iter().find(|c| c.header() == label) {
            return Some(*column);
        }

        match label.to_lowercase().replace([' ', '-'], "_").as_str() {
            "headword" | "word" | "term" => Some(Column::Headword),
            "reading" | "katakana" | "kana" => Some(Column::Reading),
            "meaning" | "translation" | "definition" => Some(Column::Meaning),
            "etymology" | "origin" => Some(Column::Etymology),
            "related" | "related_words" => Some(Column::Related),
            "category" | "field" | "related_field" => Some(Column::Category),
            "difficulty" | "level" => Some(Column::Difficulty),
            _ => None,
        }
    }
}

/// One row of a vocabulary CSV file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabEntry {
    pub headword: String,
    pub reading: String,
    pub meaning: String,
    pub etymology: String,
    pub related: String,
    pub category: String,
    pub difficulty: String,
}

impl VocabEntry {
    /// Build from canonical-order cells; missing cells are empty, extra cells ignored
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        let mut entry = Self::default();
        for (column, value) in Column::ALL.iter().zip(fields) {
            *entry.field_mut(*column) = value.as_ref().to_string();
        }
        entry
    }

    pub fn to_fields(&self) -> [&str; COLUMN_COUNT] {
        Column::ALL.map(|column| self.field(column))
    }

    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Headword => &self.headword,
            Column::Reading => &self.reading,
            Column::Meaning => &self.meaning,
            Column::Etymology => &self.etymology,
            Column::Related => &self.related,
            Column::Category => &self.category,
            Column::Difficulty => &self.difficulty,
        }
    }

    pub fn field_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Headword => &mut self.headword,
            Column::Reading => &mut self.reading,
            Column::Meaning => &mut self.meaning,
            Column::Etymology => &mut self.etymology,
            Column::Related => &mut self.related,
            Column::Category => &mut self.category,
            Column::Difficulty => &mut self.difficulty,
        }
    }
}

/// Ordinal difficulty attached to vocabulary entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Beginner),
            2 => Some(Difficulty::Intermediate),
            3 => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Digit written to the CSV column
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "1",
            Difficulty::Intermediate => "2",
            Difficulty::Advanced => "3",
        }
    }

    /// Japanese label (初級/中級/上級)
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "初級",
            Difficulty::Intermediate => "中級",
            Difficulty::Advanced => "上級",
        }
    }
}

/// Reading-comprehension passage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    /// Fields this tool does not know about, kept on round-trip
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub japanese: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_aliases_resolve() {
        assert_eq!(Column::from_header("単語"), Some(Column::Headword));
        assert_eq!(Column::from_header("\u{feff}単語"), Some(Column::Headword));
        assert_eq!(Column::from_header(" Related Words "), Some(Column::Related));
        assert_eq!(Column::from_header("LEVEL"), Some(Column::Difficulty));
        assert_eq!(Column::from_header("notes"), None);
    }

    #[test]
    fn entry_from_short_fields_pads() {
        let entry = VocabEntry::from_fields(&["apple", "アップル"]);
        assert_eq!(entry.reading, "アップル");
        assert!(entry.meaning.is_empty());
        assert_eq!(entry.to_fields()[0], "apple");
    }

    #[test]
    fn passage_keeps_unknown_fields() {
        let json = r#"{"title":"T","level":"A1","id":7,"phrases":[{"words":["hi"],"japanese":"やあ","segments":[{"word":"hi","reading":"ハイ","meaning":"やあ"}]}]}"#;
        let passage: Passage = serde_json::from_str(json).unwrap();
        assert_eq!(passage.extra.get("id"), Some(&Value::from(7)));

        let back = serde_json::to_value(&passage).unwrap();
        assert_eq!(back["id"], 7);
        assert!(back["phrases"][0]["segments"][0].get("ipa").is_none());
    }
}
