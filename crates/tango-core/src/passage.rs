use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tango_types::Passage;

use crate::error::{Result, TangoError};

/// A passage JSON file holding either one passage or an array of them
#[derive(Debug, Clone)]
pub struct PassageFile {
    pub path: PathBuf,
    pub passages: Vec<Passage>,
    /// Top level was an array
    pub is_array: bool,
}

impl PassageFile {
    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| TangoError::io(path, e))?;
        let file = Self::parse(path, &data)?;
        tracing::debug!(
            "Loaded {} passages from {}",
            file.passages.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn parse(path: &Path, data: &str) -> Result<Self> {
        let json_error = |source| TangoError::Json {
            path: path.to_path_buf(),
            source,
        };

        let value: Value = serde_json::from_str(data.trim_start_matches('\u{feff}')).map_err(json_error)?;
        let is_array = value.is_array();
        let passages: Vec<Passage> = if is_array {
            serde_json::from_value(value).map_err(json_error)?
        } else {
            vec![serde_json::from_value(value).map_err(json_error)?]
        };

        Ok(Self {
            path: path.to_path_buf(),
            passages,
            is_array,
        })
    }

    /// Pretty JSON with two-space indent, same top-level shape as the source
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"  ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);

        let result = match (self.is_array, self.passages.as_slice()) {
            (false, [single]) => single.serialize(&mut serializer),
            _ => self.passages.serialize(&mut serializer),
        };
        result.map_err(|source| TangoError::Json {
            path: self.path.clone(),
            source,
        })?;

        out.push(b'\n');
        Ok(out)
    }

    /// Every segment, for fixes that walk the whole file
    pub fn segments_mut(&mut self) -> impl Iterator<Item = &mut tango_types::Segment> {
        self.passages
            .iter_mut()
            .flat_map(|p| p.phrases.iter_mut())
            .flat_map(|phrase| phrase.segments.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
  "title": "At the Station",
  "level": "初級",
  "phrases": [
    {
      "words": ["Where", "is", "the", "train"],
      "japanese": "電車はどこですか",
      "segments": [
        { "word": "train", "reading": "トレイン", "meaning": "電車" }
      ]
    }
  ]
}"#;

    #[test]
    fn single_object_round_trips_as_object() {
        let file = PassageFile::parse(Path::new("p.json"), SINGLE).unwrap();
        assert!(!file.is_array);
        assert_eq!(file.passages[0].phrases[0].segments[0].meaning, "電車");

        let out = String::from_utf8(file.to_json_bytes().unwrap()).unwrap();
        assert!(out.starts_with("{\n  \"title\""));
        assert!(out.contains("電車はどこですか"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn array_stays_array() {
        let data = format!("[{SINGLE}, {SINGLE}]");
        let mut file = PassageFile::parse(Path::new("p.json"), &data).unwrap();
        assert!(file.is_array);
        assert_eq!(file.segments_mut().count(), 2);

        let out = file.to_json_bytes().unwrap();
        assert_eq!(out[0], b'[');
    }

    #[test]
    fn unknown_keys_keep_their_order() {
        let data = r#"{"zeta": 1, "title": "T", "alpha": 2, "phrases": []}"#;
        let file = PassageFile::parse(Path::new("p.json"), data).unwrap();

        let out = String::from_utf8(file.to_json_bytes().unwrap()).unwrap();
        let zeta = out.find("\"zeta\"").unwrap();
        let alpha = out.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn malformed_json_names_the_file() {
        let err = PassageFile::parse(Path::new("bad.json"), "{ nope").unwrap_err();
        assert!(err.to_string().starts_with("bad.json"));
    }
}
