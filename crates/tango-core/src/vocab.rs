use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tango_types::{Column, VocabEntry};

use crate::columns::HeaderLayout;
use crate::error::{Result, TangoError};

const BOM: &[u8] = b"\xef\xbb\xbf";

/// A CSV row as it appeared in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source file
    pub line: usize,
    pub fields: Vec<String>,
}

/// A vocabulary CSV file loaded without any shape assumptions
#[derive(Debug, Clone)]
pub struct VocabTable {
    pub path: PathBuf,
    /// First row, when it looks like a header
    pub header: Option<RawRecord>,
    pub records: Vec<RawRecord>,
    /// Source started with a UTF-8 byte order mark
    pub bom: bool,
}

impl VocabTable {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| TangoError::io(path, e))?;
        let mut table = Self::parse(path, &bytes)?;
        tracing::debug!(
            "Loaded {} rows from {}",
            table.records.len(),
            path.display()
        );
        table.path = path.to_path_buf();
        Ok(table)
    }

    /// Parse CSV bytes; `path` is only used for error messages
    pub fn parse(path: &Path, bytes: &[u8]) -> Result<Self> {
        let bom = bytes.starts_with(BOM);
        let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|source| TangoError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            rows.push(to_raw(&record));
        }

        let mut rows = rows.into_iter();
        let mut header = None;
        let mut records = Vec::new();

        if let Some(first) = rows.next() {
            if HeaderLayout::looks_like_header(&first.fields) {
                header = Some(first);
            } else {
                tracing::warn!(
                    "{}: no recognizable header, treating first row as data",
                    path.display()
                );
                records.push(first);
            }
        }
        records.extend(rows);

        Ok(Self {
            path: path.to_path_buf(),
            header,
            records,
            bom,
        })
    }

    pub fn layout(&self) -> HeaderLayout {
        match &self.header {
            Some(header) => HeaderLayout::detect(&header.fields),
            None => HeaderLayout::canonical(),
        }
    }

    /// Rows in canonical column order; no cell is dropped
    pub fn entries(&self) -> Vec<VocabEntry> {
        let layout = self.layout();
        self.records
            .iter()
            .map(|record| layout.reshape(&record.fields))
            .collect()
    }

    /// Replace the contents with canonical rows
    pub fn from_entries(path: &Path, entries: &[VocabEntry]) -> Self {
        let header = RawRecord {
            line: 1,
            fields: Column::ALL.iter().map(|c| c.header().to_string()).collect(),
        };
        let records = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| RawRecord {
                line: i + 2,
                fields: entry.to_fields().iter().map(|f| f.to_string()).collect(),
            })
            .collect();

        Self {
            path: path.to_path_buf(),
            header: Some(header),
            records,
            bom: false,
        }
    }

    /// Serialize with the canonical header, keeping a source BOM if there was one
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        if self.bom {
            out.extend_from_slice(BOM);
        }

        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(&mut out);

        let csv_error = |source| TangoError::Csv {
            path: self.path.clone(),
            source,
        };

        writer
            .write_record(Column::ALL.iter().map(|c| c.header()))
            .map_err(csv_error)?;
        for entry in self.entries() {
            writer.write_record(entry.to_fields()).map_err(csv_error)?;
        }
        writer
            .flush()
            .map_err(|e| TangoError::io(&self.path, e))?;
        drop(writer);

        Ok(out)
    }
}

fn to_raw(record: &StringRecord) -> RawRecord {
    let line = record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or_default();
    RawRecord {
        line,
        fields: record.iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "単語,読み,意味,語源,関連語,関連分野,難易度\n\
        apple,アップル,りんご,,fruit,食べ物・料理,1\n\
        \"book, paper\",ブック,本,,,学校・教育,2\n";

    #[test]
    fn parses_header_and_rows_with_line_numbers() {
        let table = VocabTable::parse(Path::new("t.csv"), SAMPLE.as_bytes()).unwrap();
        assert!(table.header.is_some());
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].line, 2);
        assert_eq!(table.records[1].fields[0], "book, paper");
    }

    #[test]
    fn headerless_file_keeps_first_row() {
        let table =
            VocabTable::parse(Path::new("t.csv"), "apple,アップル,りんご\n".as_bytes()).unwrap();
        assert!(table.header.is_none());
        assert_eq!(table.entries()[0].meaning, "りんご");
    }

    #[test]
    fn writes_canonical_csv_and_keeps_bom() {
        let mut bytes = BOM.to_vec();
        bytes.extend_from_slice(SAMPLE.as_bytes());
        let table = VocabTable::parse(Path::new("t.csv"), &bytes).unwrap();
        assert!(table.bom);

        let out = table.to_csv_bytes().unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn missing_file_is_reported_as_such() {
        let err = VocabTable::read(Path::new("/nonexistent/vocab.csv")).unwrap_err();
        assert!(matches!(err, TangoError::MissingFile(_)));
    }

    #[test]
    fn headword_that_matches_a_column_name_is_data() {
        let csv = "level,レベル,水準,,,日常生活,1\napple,アップル,りんご,,,食べ物・料理,1\n";
        let table = VocabTable::parse(Path::new("t.csv"), csv.as_bytes()).unwrap();
        assert!(table.header.is_none());

        let entries = table.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].headword, "level");
        assert_eq!(entries[0].difficulty, "1");
        assert_eq!(entries[1].headword, "apple");
        assert_eq!(entries[1].category, "食べ物・料理");
    }
}
