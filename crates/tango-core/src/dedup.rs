use std::collections::HashMap;

use tango_types::{Column, VocabEntry};

use crate::fix::{Fix, FixReport};
use crate::preprocess::normalize_key;

/// Drops repeated headwords, keeping the first row and filling its blanks from the rest
pub struct DedupFix;

impl Fix for DedupFix {
    fn name(&self) -> &str {
        "dedup"
    }

    fn apply(&self, entries: &mut Vec<VocabEntry>) -> FixReport {
        let mut report = FixReport::new(self.name());
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut kept: Vec<VocabEntry> = Vec::with_capacity(entries.len());

        for entry in entries.drain(..) {
            let key = normalize_key(&entry.headword);
            if key.is_empty() {
                kept.push(entry);
                continue;
            }

            match first_seen.get(&key) {
                Some(&index) => {
                    let merged = merge_into(&mut kept[index], &entry);
                    report.changed += 1;
                    if merged > 0 {
                        report.sample(format!("{}: merged {merged} field(s)", entry.headword));
                    } else {
                        report.sample(format!("{}: dropped duplicate", entry.headword));
                    }
                }
                None => {
                    first_seen.insert(key, kept.len());
                    kept.push(entry);
                }
            }
        }

        *entries = kept;
        report
    }
}

/// Copy non-empty cells of `other` into empty cells of `target`
fn merge_into(target: &mut VocabEntry, other: &VocabEntry) -> usize {
    let mut merged = 0;
    for column in Column::ALL {
        let value = other.field(column);
        let slot = target.field_mut(column);
        if slot.trim().is_empty() && !value.trim().is_empty() {
            *slot = value.to_string();
            merged += 1;
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(fields: &[&str]) -> VocabEntry {
        VocabEntry::from_fields(fields)
    }

    #[test]
    fn keeps_first_and_merges_blanks() {
        let mut entries = vec![
            entry(&["Apple", "アップル", "", "", "", "食べ物・料理", "1"]),
            entry(&["banana", "バナナ", "バナナ"]),
            entry(&["apple ", "", "りんご", "", "", "日常生活", "2"]),
        ];
        let report = DedupFix.apply(&mut entries);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].meaning, "りんご");
        assert_eq!(entries[0].category, "食べ物・料理");
        assert_eq!(entries[0].difficulty, "1");
        assert_eq!(report.changed, 1);
        assert!(report.samples[0].contains("merged 1"));
    }

    #[test]
    fn rows_without_headword_are_never_merged() {
        let mut entries = vec![entry(&["", "ア"]), entry(&["", "イ"])];
        let report = DedupFix.apply(&mut entries);
        assert_eq!(entries.len(), 2);
        assert!(report.is_noop());
    }

    #[test]
    fn order_of_survivors_is_stable() {
        let mut entries = vec![entry(&["b"]), entry(&["a"]), entry(&["B"]), entry(&["c"])];
        DedupFix.apply(&mut entries);
        let words: Vec<_> = entries.iter().map(|e| e.headword.as_str()).collect();
        assert_eq!(words, ["b", "a", "c"]);
    }
}
