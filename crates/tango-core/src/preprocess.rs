use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to a cell before it is compared or written
pub trait Preprocessor {
    /// Trim, fold to NFKC and drop line breaks; cells never span lines in the output CSV
    fn process(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        trimmed
            .nfkc()
            .filter(|c| !matches!(c, '\n' | '\r'))
            .collect::<String>()
            .trim()
            .to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Comparison key: NFKC, lowercase, inner whitespace collapsed
pub fn normalize_key(text: &str) -> String {
    let folded: String = text.nfkc().collect::<String>().to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_folds_width_and_newlines() {
        let cleaned = DefaultPreprocessor.process("  ＡＰＰＬＥ\r\n ");
        assert_eq!(cleaned, "APPLE");
    }

    #[test]
    fn keys_ignore_case_width_and_spacing() {
        assert_eq!(normalize_key("  Ice   Cream "), "ice cream");
        assert_eq!(normalize_key("ｉｃｅ cream"), "ice cream");
        assert_eq!(normalize_key(""), "");
    }
}
