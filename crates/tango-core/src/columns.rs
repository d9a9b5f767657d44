use tango_types::{COLUMN_COUNT, Column, VocabEntry};

use crate::fix::FixReport;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::vocab::VocabTable;

/// Separator used when overflow cells are folded into the related-words column
pub const RELATED_SEPARATOR: &str = "、";

/// Where each canonical column sits in a file's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    index: [Option<usize>; COLUMN_COUNT],
    width: usize,
}

impl HeaderLayout {
    /// Positional layout: cells are already in canonical order
    pub fn canonical() -> Self {
        Self {
            index: std::array::from_fn(Some),
            width: COLUMN_COUNT,
        }
    }

    /// Whether a first row reads as a header rather than data: at least two distinct
    /// columns recognized, and recognized cells are most of the non-empty ones
    pub fn looks_like_header<S: AsRef<str>>(cells: &[S]) -> bool {
        let mut seen = [false; COLUMN_COUNT];
        let mut recognized = 0;
        let mut filled = 0;

        for cell in cells.iter().map(AsRef::as_ref) {
            if cell.trim().is_empty() {
                continue;
            }
            filled += 1;
            if let Some(column) = Column::from_header(cell) {
                recognized += 1;
                seen[column.index()] = true;
            }
        }

        let distinct = seen.iter().filter(|s| **s).count();
        distinct >= 2 && recognized * 2 > filled
    }

    /// Build from header cells; the first occurrence of a column wins
    pub fn detect<S: AsRef<str>>(header: &[S]) -> Self {
        let mut index = [None; COLUMN_COUNT];
        for (i, cell) in header.iter().enumerate() {
            if let Some(column) = Column::from_header(cell.as_ref()) {
                index[column.index()].get_or_insert(i);
            }
        }

        if index.iter().all(Option::is_none) {
            return Self::canonical();
        }

        Self {
            index,
            width: header.len(),
        }
    }

    /// Header is exactly the canonical seven columns
    pub fn is_canonical(&self) -> bool {
        self.width == COLUMN_COUNT && self.index.iter().enumerate().all(|(c, i)| *i == Some(c))
    }

    pub fn missing(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.index[c.index()].is_none())
            .collect()
    }

    /// Map one row into canonical order. Cells under unrecognized header names or
    /// past the header's width are folded into related words, never dropped.
    pub fn reshape(&self, fields: &[String]) -> VocabEntry {
        let mut entry = if self.is_canonical() {
            positional(fields)
        } else {
            let mut entry = VocabEntry::default();
            for column in Column::ALL {
                if let Some(value) = self.index[column.index()].and_then(|i| fields.get(i)) {
                    *entry.field_mut(column) = value.clone();
                }
            }
            let unmapped: Vec<String> = fields
                .iter()
                .enumerate()
                .filter(|(i, _)| !self.index.contains(&Some(*i)))
                .map(|(_, cell)| cell.clone())
                .collect();
            append_related(&mut entry, &unmapped);
            entry
        };

        for column in Column::ALL {
            let value = entry.field_mut(column);
            *value = value.trim().to_string();
        }
        entry.headword = DefaultPreprocessor.process(&entry.headword);

        entry
    }

    /// Whether a row needs reshaping to become canonical
    pub fn row_needs_repair(&self, fields: &[String]) -> bool {
        !self.is_canonical() || fields.len() != COLUMN_COUNT
    }
}

fn positional(fields: &[String]) -> VocabEntry {
    if fields.len() <= COLUMN_COUNT {
        return VocabEntry::from_fields(fields);
    }

    // headword, reading, meaning, etymology, related..., category, difficulty
    let n = fields.len();
    let mut entry = VocabEntry::from_fields(&fields[..4]);
    entry.related = join_nonempty(&fields[4..n - 2]);
    entry.category = fields[n - 2].clone();
    entry.difficulty = fields[n - 1].clone();
    entry
}

fn append_related(entry: &mut VocabEntry, extra: &[String]) {
    let extra = join_nonempty(extra);
    if extra.is_empty() {
        return;
    }
    if entry.related.is_empty() {
        entry.related = extra;
    } else {
        entry.related = format!("{}{RELATED_SEPARATOR}{extra}", entry.related);
    }
}

fn join_nonempty(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(RELATED_SEPARATOR)
}

/// Reshape every row of a table, reporting what changed
pub fn repair(table: &VocabTable) -> (Vec<VocabEntry>, FixReport) {
    let layout = table.layout();
    let mut report = FixReport::new("columns");

    if table.header.is_none() {
        report.sample("header row added".to_string());
    } else if !layout.is_canonical() {
        let missing = layout.missing();
        if missing.is_empty() {
            report.sample("header reordered to canonical order".to_string());
        } else {
            let names: Vec<_> = missing.iter().map(|c| c.header()).collect();
            report.sample(format!("added missing columns: {}", names.join(", ")));
        }
    }

    let entries = table
        .records
        .iter()
        .map(|record| {
            let entry = layout.reshape(&record.fields);
            if layout.row_needs_repair(&record.fields) {
                report.changed += 1;
                if record.fields.len() != layout.width {
                    report.sample(format!(
                        "line {}: {} cells -> {COLUMN_COUNT}",
                        record.line,
                        record.fields.len()
                    ));
                }
            }
            entry
        })
        .collect();

    (entries, report)
}
