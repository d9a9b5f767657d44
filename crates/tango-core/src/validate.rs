use std::fmt;
use std::path::{Path, PathBuf};

use tango_config::validation::ValidationConfig;
use tango_types::{COLUMN_COUNT, Column};

use crate::passage::PassageFile;
use crate::taxonomy::Taxonomy;
use crate::vocab::VocabTable;

/// Decides whether a reading cell is written in the expected script
pub trait ReadingScript {
    fn is_valid_reading(&self, text: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Header,
    ColumnCount,
    EmptyField,
    Difficulty,
    Reading,
    Category,
    Passage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: Option<usize>,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    fn new(path: &Path, line: Option<usize>, kind: ViolationKind, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            kind,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}: {}", self.path.display(), self.message),
            None => write!(f, "{}: {}", self.path.display(), self.message),
        }
    }
}

/// Check a vocabulary file; never modifies it
pub fn validate_vocab(
    table: &VocabTable,
    rules: &ValidationConfig,
    taxonomy: &Taxonomy,
    script: Option<&dyn ReadingScript>,
) -> Vec<Violation> {
    let path = table.path.as_path();
    let mut violations = Vec::new();

    let expected: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
    match &table.header {
        None => violations.push(Violation::new(
            path,
            Some(1),
            ViolationKind::Header,
            "missing header row".to_string(),
        )),
        Some(header) if header.fields != expected => violations.push(Violation::new(
            path,
            Some(header.line),
            ViolationKind::Header,
            format!("header is [{}], expected [{}]", header.fields.join(","), expected.join(",")),
        )),
        Some(_) => {}
    }

    let layout = table.layout();
    for record in &table.records {
        let line = Some(record.line);

        if record.fields.len() != COLUMN_COUNT {
            violations.push(Violation::new(
                path,
                line,
                ViolationKind::ColumnCount,
                format!("{} columns, expected {COLUMN_COUNT}", record.fields.len()),
            ));
        }

        let entry = layout.reshape(&record.fields);

        for column in [Column::Headword, Column::Reading, Column::Meaning] {
            if entry.field(column).is_empty() {
                violations.push(Violation::new(
                    path,
                    line,
                    ViolationKind::EmptyField,
                    format!("empty {}", column.header()),
                ));
            }
        }

        match entry.difficulty.parse::<u8>() {
            Ok(level) if (rules.min_difficulty..=rules.max_difficulty).contains(&level) => {}
            Ok(level) => violations.push(Violation::new(
                path,
                line,
                ViolationKind::Difficulty,
                format!(
                    "difficulty {level} outside {}..={}",
                    rules.min_difficulty, rules.max_difficulty
                ),
            )),
            Err(_) => violations.push(Violation::new(
                path,
                line,
                ViolationKind::Difficulty,
                format!("difficulty {:?} is not a number", entry.difficulty),
            )),
        }

        if rules.require_katakana && !entry.reading.is_empty() {
            if let Some(script) = script {
                if !script.is_valid_reading(&entry.reading) {
                    violations.push(Violation::new(
                        path,
                        line,
                        ViolationKind::Reading,
                        format!("reading {:?} is not katakana", entry.reading),
                    ));
                }
            }
        }

        if rules.require_known_category && !taxonomy.is_canonical(&entry.category) {
            violations.push(Violation::new(
                path,
                line,
                ViolationKind::Category,
                format!("unknown category {:?}", entry.category),
            ));
        }
    }

    violations
}

/// Check passages for missing content; never modifies the file
pub fn validate_passages(file: &PassageFile) -> Vec<Violation> {
    let path = file.path.as_path();
    let mut violations = Vec::new();
    let mut report = |location: String, problem: &str| {
        violations.push(Violation::new(
            path,
            None,
            ViolationKind::Passage,
            format!("{location}: {problem}"),
        ));
    };

    for (p, passage) in file.passages.iter().enumerate() {
        let at = format!("passage {}", p + 1);

        if passage.title.trim().is_empty() {
            report(at.clone(), "empty title");
        }
        if passage.phrases.is_empty() {
            report(at.clone(), "no phrases");
        }

        for (ph, phrase) in passage.phrases.iter().enumerate() {
            let at = format!("{at} phrase {}", ph + 1);

            if phrase.words.iter().all(|w| w.trim().is_empty()) {
                report(at.clone(), "no words");
            }
            if phrase.japanese.trim().is_empty() {
                report(at.clone(), "empty japanese");
            }

            for (s, segment) in phrase.segments.iter().enumerate() {
                let at = format!("{at} segment {}", s + 1);
                for (field, value) in [
                    ("word", &segment.word),
                    ("reading", &segment.reading),
                    ("meaning", &segment.meaning),
                ] {
                    if value.trim().is_empty() {
                        report(at.clone(), &format!("empty {field}"));
                    }
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AsciiFree;

    impl ReadingScript for AsciiFree {
        fn is_valid_reading(&self, text: &str) -> bool {
            !text.chars().any(|c| c.is_ascii_alphabetic())
        }
    }

    fn table(csv: &str) -> VocabTable {
        VocabTable::parse(Path::new("v.csv"), csv.as_bytes()).unwrap()
    }

    const CLEAN: &str = "単語,読み,意味,語源,関連語,関連分野,難易度\n\
        apple,アップル,りんご,,,食べ物・料理,1\n";

    #[test]
    fn clean_file_has_no_violations_twice() {
        let table = table(CLEAN);
        let rules = ValidationConfig::default();
        let taxonomy = Taxonomy::canonical();

        let first = validate_vocab(&table, &rules, &taxonomy, Some(&AsciiFree));
        let second = validate_vocab(&table, &rules, &taxonomy, Some(&AsciiFree));
        assert!(first.is_empty(), "{first:?}");
        assert_eq!(first, second);
    }

    #[test]
    fn reports_each_problem_with_its_line() {
        let table = table(
            "単語,読み,意味,語源,関連語,関連分野,難易度\n\
             pen,pen,ペン,,,学校,5\n\
             cup,カップ\n",
        );
        let violations = validate_vocab(
            &table,
            &ValidationConfig::default(),
            &Taxonomy::canonical(),
            Some(&AsciiFree),
        );

        let kinds: Vec<_> = violations.iter().map(|v| (v.line, v.kind)).collect();
        assert!(kinds.contains(&(Some(2), ViolationKind::Difficulty)));
        assert!(kinds.contains(&(Some(2), ViolationKind::Reading)));
        assert!(kinds.contains(&(Some(2), ViolationKind::Category)));
        assert!(kinds.contains(&(Some(3), ViolationKind::ColumnCount)));
        assert!(kinds.contains(&(Some(3), ViolationKind::EmptyField)));
        assert_eq!(violations[0].to_string(), "v.csv:2: difficulty 5 outside 1..=3");
    }

    #[test]
    fn wrong_header_is_reported() {
        let table = table("word,reading,meaning,etymology,related,category,difficulty\n");
        let violations =
            validate_vocab(&table, &ValidationConfig::default(), &Taxonomy::canonical(), None);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Header);
    }

    #[test]
    fn passages_report_empty_parts() {
        let file = PassageFile::parse(
            Path::new("p.json"),
            r#"{"title":"","phrases":[{"words":["hi"],"japanese":"","segments":[{"word":"hi","reading":"","meaning":"やあ"}]}]}"#,
        )
        .unwrap();
        let messages: Vec<_> = validate_passages(&file)
            .into_iter()
            .map(|v| v.message)
            .collect();

        assert_eq!(
            messages,
            [
                "passage 1: empty title",
                "passage 1 phrase 1: empty japanese",
                "passage 1 phrase 1 segment 1: empty reading",
            ]
        );
    }
}
