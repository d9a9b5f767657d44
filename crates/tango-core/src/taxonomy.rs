//! The one category taxonomy every vocabulary file is normalized against.
//!
//! Labels drifted over time (`学校`, `School`, `教育`, `学校・教育` all mean the
//! same thing). [`Taxonomy::resolve`] maps any known spelling to its canonical
//! label, and [`Taxonomy::normalize_cell`] reduces a multi-category cell to a
//! single label.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tango_config::taxonomy::TaxonomyConfig;
use tango_types::VocabEntry;

use crate::error::{Result, TangoError};
use crate::fix::{Fix, FixReport};
use crate::preprocess::normalize_key;

/// Canonical category labels, in display order
pub const CATEGORIES: [&str; 15] = [
    "日常生活",
    "学校・教育",
    "仕事・ビジネス",
    "買い物",
    "食べ物・料理",
    "旅行・交通",
    "健康・医療",
    "自然・環境",
    "科学・技術",
    "芸術・文化",
    "スポーツ・趣味",
    "社会・政治",
    "経済・金融",
    "感情・性格",
    "その他",
];

pub const FALLBACK: &str = "その他";

/// Built-in aliases: `(spelling, canonical label)`
const ALIASES: &[(&str, &str)] = &[
    // 日常生活
    ("日常", "日常生活"),
    ("生活", "日常生活"),
    ("家庭", "日常生活"),
    ("暮らし", "日常生活"),
    ("daily life", "日常生活"),
    ("daily", "日常生活"),
    ("life", "日常生活"),
    ("home", "日常生活"),
    ("family", "日常生活"),
    // 学校・教育
    ("学校", "学校・教育"),
    ("教育", "学校・教育"),
    ("学習", "学校・教育"),
    ("勉強", "学校・教育"),
    ("school", "学校・教育"),
    ("education", "学校・教育"),
    ("study", "学校・教育"),
    ("academic", "学校・教育"),
    // 仕事・ビジネス
    ("仕事", "仕事・ビジネス"),
    ("ビジネス", "仕事・ビジネス"),
    ("職業", "仕事・ビジネス"),
    ("business", "仕事・ビジネス"),
    ("work", "仕事・ビジネス"),
    ("job", "仕事・ビジネス"),
    ("office", "仕事・ビジネス"),
    // 買い物
    ("ショッピング", "買い物"),
    ("買物", "買い物"),
    ("shopping", "買い物"),
    ("shop", "買い物"),
    // 食べ物・料理
    ("食べ物", "食べ物・料理"),
    ("料理", "食べ物・料理"),
    ("食事", "食べ物・料理"),
    ("飲食", "食べ物・料理"),
    ("food", "食べ物・料理"),
    ("cooking", "食べ物・料理"),
    ("drink", "食べ物・料理"),
    // 旅行・交通
    ("旅行", "旅行・交通"),
    ("交通", "旅行・交通"),
    ("観光", "旅行・交通"),
    ("travel", "旅行・交通"),
    ("transport", "旅行・交通"),
    ("transportation", "旅行・交通"),
    ("tourism", "旅行・交通"),
    // 健康・医療
    ("健康", "健康・医療"),
    ("医療", "健康・医療"),
    ("医学", "健康・医療"),
    ("体", "健康・医療"),
    ("health", "健康・医療"),
    ("medical", "健康・医療"),
    ("medicine", "健康・医療"),
    ("body", "健康・医療"),
    // 自然・環境
    ("自然", "自然・環境"),
    ("環境", "自然・環境"),
    ("天気", "自然・環境"),
    ("動物", "自然・環境"),
    ("nature", "自然・環境"),
    ("environment", "自然・環境"),
    ("weather", "自然・環境"),
    ("animals", "自然・環境"),
    // 科学・技術
    ("科学", "科学・技術"),
    ("技術", "科学・技術"),
    ("it", "科学・技術"),
    ("コンピュータ", "科学・技術"),
    ("テクノロジー", "科学・技術"),
    ("science", "科学・技術"),
    ("technology", "科学・技術"),
    ("tech", "科学・技術"),
    ("computer", "科学・技術"),
    // 芸術・文化
    ("芸術", "芸術・文化"),
    ("文化", "芸術・文化"),
    ("音楽", "芸術・文化"),
    ("文学", "芸術・文化"),
    ("歴史", "芸術・文化"),
    ("art", "芸術・文化"),
    ("arts", "芸術・文化"),
    ("culture", "芸術・文化"),
    ("music", "芸術・文化"),
    ("literature", "芸術・文化"),
    ("history", "芸術・文化"),
    // スポーツ・趣味
    ("スポーツ", "スポーツ・趣味"),
    ("趣味", "スポーツ・趣味"),
    ("娯楽", "スポーツ・趣味"),
    ("sports", "スポーツ・趣味"),
    ("sport", "スポーツ・趣味"),
    ("hobby", "スポーツ・趣味"),
    ("hobbies", "スポーツ・趣味"),
    ("entertainment", "スポーツ・趣味"),
    // 社会・政治
    ("社会", "社会・政治"),
    ("政治", "社会・政治"),
    ("法律", "社会・政治"),
    ("society", "社会・政治"),
    ("politics", "社会・政治"),
    ("law", "社会・政治"),
    ("government", "社会・政治"),
    // 経済・金融
    ("経済", "経済・金融"),
    ("金融", "経済・金融"),
    ("お金", "経済・金融"),
    ("economy", "経済・金融"),
    ("economics", "経済・金融"),
    ("finance", "経済・金融"),
    ("money", "経済・金融"),
    // 感情・性格
    ("感情", "感情・性格"),
    ("性格", "感情・性格"),
    ("気持ち", "感情・性格"),
    ("emotion", "感情・性格"),
    ("emotions", "感情・性格"),
    ("feelings", "感情・性格"),
    ("personality", "感情・性格"),
    // その他
    ("一般", "その他"),
    ("other", "その他"),
    ("others", "その他"),
    ("misc", "その他"),
    ("general", "その他"),
];

#[derive(Debug, Clone)]
pub struct Taxonomy {
    aliases: HashMap<String, &'static str>,
    fallback: String,
    delimiters: Vec<char>,
}

impl Taxonomy {
    pub fn canonical() -> Self {
        let mut aliases = HashMap::new();
        for label in CATEGORIES {
            aliases.insert(normalize_key(label), label);
        }
        for (alias, label) in ALIASES {
            aliases.insert(normalize_key(alias), *label);
        }

        Self {
            aliases,
            fallback: FALLBACK.to_string(),
            delimiters: TaxonomyConfig::default().delimiters.chars().collect(),
        }
    }

    /// Canonical taxonomy with the configured fallback, delimiters and alias file
    pub fn from_config(config: &TaxonomyConfig) -> Result<Self> {
        let mut taxonomy = Self::canonical();
        taxonomy.fallback = config.fallback.clone();
        taxonomy.delimiters = config.delimiters.chars().collect();

        if let Some(path) = &config.aliases_path {
            let extra = load_aliases(Path::new(path))?;
            taxonomy = taxonomy.with_aliases(extra);
        }

        Ok(taxonomy)
    }

    /// Add `alias -> label` pairs; pairs whose label is not canonical are ignored
    pub fn with_aliases(mut self, extra: HashMap<String, String>) -> Self {
        for (alias, label) in extra {
            match CATEGORIES.iter().find(|c| **c == label) {
                Some(canonical) => {
                    self.aliases.insert(normalize_key(&alias), *canonical);
                }
                None => tracing::warn!("Alias {alias:?} points at unknown category {label:?}"),
            }
        }
        self
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn is_canonical(&self, label: &str) -> bool {
        CATEGORIES.contains(&label) || label == self.fallback
    }

    /// Canonical label for one spelling
    pub fn resolve(&self, label: &str) -> Option<&'static str> {
        let key = normalize_key(label);
        if key.is_empty() {
            return None;
        }
        self.aliases.get(&key).copied()
    }

    pub fn split<'a>(&self, cell: &'a str) -> Vec<&'a str> {
        split_categories(cell, &self.delimiters)
    }

    /// Canonical label for a whole cell, or its first recognized token
    pub fn classify(&self, cell: &str) -> Option<&'static str> {
        let trimmed = cell.trim();

        // A canonical label may itself contain a delimiter (`学校・教育`)
        self.resolve(trimmed).or_else(|| {
            self.split(trimmed)
                .into_iter()
                .find_map(|token| self.resolve(token))
        })
    }

    /// First recognized token wins, otherwise the fallback; empty stays empty
    pub fn normalize_cell(&self, cell: &str) -> String {
        if cell.trim().is_empty() {
            return String::new();
        }

        self.classify(cell)
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Split a multi-category cell on any of `delimiters`
pub fn split_categories<'a>(cell: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    cell.split(|c: char| delimiters.contains(&c))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Read a JSON object of `alias -> canonical label`
pub fn load_aliases(path: &Path) -> Result<HashMap<String, String>> {
    let data = fs::read_to_string(path).map_err(|e| TangoError::io(path, e))?;
    let aliases: HashMap<String, String> =
        serde_json::from_str(&data).map_err(|source| TangoError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("Loaded {} category aliases from {}", aliases.len(), path.display());
    Ok(aliases)
}

/// Rewrites category cells to a single canonical label
pub struct CategoryFix<'a> {
    pub taxonomy: &'a Taxonomy,
}

impl Fix for CategoryFix<'_> {
    fn name(&self) -> &str {
        "categories"
    }

    fn apply(&self, entries: &mut Vec<VocabEntry>) -> FixReport {
        let mut report = FixReport::new(self.name());

        for entry in entries.iter_mut() {
            let normalized = self.taxonomy.normalize_cell(&entry.category);
            if normalized == entry.category {
                continue;
            }
            if self.taxonomy.classify(&entry.category).is_none() {
                report.skipped += 1;
            }
            report.sample(format!("{}: {} -> {normalized}", entry.headword, entry.category));
            entry.category = normalized;
            report.changed += 1;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_delimiter_cell_becomes_single_label() {
        let taxonomy = Taxonomy::canonical();
        assert_eq!(taxonomy.normalize_cell("学校;買い物"), "学校・教育");
        assert_eq!(taxonomy.normalize_cell("Shopping、Food"), "買い物");
        assert_eq!(taxonomy.normalize_cell("unknown / 旅行"), "旅行・交通");
    }

    #[test]
    fn canonical_labels_with_middle_dot_survive() {
        let taxonomy = Taxonomy::canonical();
        for label in CATEGORIES {
            assert_eq!(taxonomy.normalize_cell(label), label);
        }
    }

    #[test]
    fn unknown_falls_back_and_empty_stays_empty() {
        let taxonomy = Taxonomy::canonical();
        assert_eq!(taxonomy.normalize_cell("quantum chromodynamics"), FALLBACK);
        assert_eq!(taxonomy.normalize_cell("  "), "");
    }

    #[test]
    fn english_and_width_variants_resolve() {
        let taxonomy = Taxonomy::canonical();
        assert_eq!(taxonomy.resolve("Daily  Life"), Some("日常生活"));
        assert_eq!(taxonomy.resolve("ＩＴ"), Some("科学・技術"));
    }

    #[test]
    fn extra_aliases_must_target_canonical_labels() {
        let extra = HashMap::from([
            ("カフェ".to_string(), "食べ物・料理".to_string()),
            ("宇宙".to_string(), "宇宙科学".to_string()),
        ]);
        let taxonomy = Taxonomy::canonical().with_aliases(extra);
        assert_eq!(taxonomy.resolve("カフェ"), Some("食べ物・料理"));
        assert_eq!(taxonomy.resolve("宇宙"), None);
    }

    #[test]
    fn fix_is_idempotent() {
        let taxonomy = Taxonomy::canonical();
        let fix = CategoryFix { taxonomy: &taxonomy };
        let mut entries = vec![
            VocabEntry { category: "school;shopping".into(), ..Default::default() },
            VocabEntry { category: "謎".into(), ..Default::default() },
        ];

        let first = fix.apply(&mut entries);
        assert_eq!(first.changed, 2);
        assert_eq!(first.skipped, 1);
        assert_eq!(entries[0].category, "学校・教育");
        assert_eq!(entries[1].category, FALLBACK);

        let second = fix.apply(&mut entries);
        assert!(second.is_noop());
    }
}
