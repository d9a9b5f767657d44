use std::sync::LazyLock;

use regex::Regex;
use tango_types::{Difficulty, VocabEntry};

use crate::fix::{Fix, FixReport};
use crate::preprocess::normalize_key;

static PREFIXED_LEVEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:lv\.?|level|レベル|難易度)?\s*[:：]?\s*([1-3])(?:\s*(?:級|点))?$")
        .expect("static regex")
});

/// Read a difficulty cell in any of the spellings found in the data
pub fn parse_difficulty(text: &str) -> Option<Difficulty> {
    let key = normalize_key(text);
    if key.is_empty() {
        return None;
    }

    let level = match key.as_str() {
        "初級" | "初" | "easy" | "beginner" | "basic" | "基礎" | "★" | "☆" => 1,
        "中級" | "中" | "medium" | "normal" | "intermediate" | "標準" | "★★" | "☆☆" => 2,
        "上級" | "上" | "hard" | "difficult" | "advanced" | "発展" | "★★★" | "☆☆☆" => 3,
        _ => {
            let captures = PREFIXED_LEVEL.captures(&key)?;
            captures[1].parse().ok()?
        }
    };

    Difficulty::from_level(level)
}

/// Rewrites difficulty cells to `1`, `2` or `3`
pub struct DifficultyFix;

impl Fix for DifficultyFix {
    fn name(&self) -> &str {
        "difficulty"
    }

    fn apply(&self, entries: &mut Vec<VocabEntry>) -> FixReport {
        let mut report = FixReport::new(self.name());

        for entry in entries.iter_mut() {
            match parse_difficulty(&entry.difficulty) {
                Some(level) if entry.difficulty != level.as_str() => {
                    report.sample(format!("{}: {} -> {}", entry.headword, entry.difficulty, level.as_str()));
                    entry.difficulty = level.as_str().to_string();
                    report.changed += 1;
                }
                Some(_) => {}
                None => {
                    report.skipped += 1;
                    tracing::debug!(
                        "Unrecognized difficulty {:?} for {:?}",
                        entry.difficulty,
                        entry.headword
                    );
                }
            }
        }

        report
    }
}
