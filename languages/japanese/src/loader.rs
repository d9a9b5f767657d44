use std::collections::HashMap;
use std::path::Path;

/// Lookup key for English words: trimmed, lowercase, surrounding punctuation removed
pub fn word_key(word: &str) -> String {
    word.trim()
        .trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'' && c != '-')
        .to_lowercase()
}

/// Load a two-column TSV (`word\tvalue`). Blank lines and `#` comments are skipped.
pub fn load_tsv(path: &Path) -> Result<HashMap<String, String>, std::io::Error> {
    tracing::info!("Loading word list from file: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let mut entries = HashMap::new();

    for line in content.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() >= 2 && !parts[1].trim().is_empty() {
            entries.insert(word_key(parts[0]), parts[1].trim().to_string());
        }
    }

    tracing::info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Built-in pairs keyed the same way file entries are
pub fn from_pairs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(word, value)| (word_key(word), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_strip_case_and_punctuation() {
        assert_eq!(word_key(" Hello, "), "hello");
        assert_eq!(word_key("\"don't\""), "don't");
        assert_eq!(word_key("well-known."), "well-known");
    }

    #[test]
    fn tsv_skips_comments_and_short_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.tsv");
        std::fs::write(&path, "# word\treading\nApple\tアップル\nbroken\n\nfig\t\n").unwrap();

        let entries = load_tsv(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["apple"], "アップル");
    }
}
