use tango_core::fix::FixReport;
use tango_core::passage::PassageFile;

use crate::glossary::Glossary;
use crate::ipa::IpaDictionary;
use crate::kana::{is_katakana, to_katakana};
use crate::reading::ReadingFiller;

/// Fill empty segment readings and meanings; readings in kana/romaji become katakana
pub fn fill_segments(file: &mut PassageFile, filler: &ReadingFiller, glossary: &Glossary) -> FixReport {
    let mut report = FixReport::new("segments");

    for segment in file.segments_mut() {
        let mut touched = false;

        let reading = segment.reading.trim();
        let new_reading = if reading.is_empty() {
            filler.reading_for(&segment.word)
        } else if is_katakana(reading) {
            None
        } else {
            to_katakana(reading)
        };
        if let Some(reading) = new_reading {
            report.sample(format!("{}: reading {reading}", segment.word));
            segment.reading = reading;
            touched = true;
        }

        if segment.meaning.trim().is_empty() {
            if let Some(meaning) = glossary.meaning(&segment.word) {
                report.sample(format!("{}: meaning {meaning}", segment.word));
                segment.meaning = meaning.to_string();
                touched = true;
            }
        }

        if touched {
            report.changed += 1;
        } else if segment.reading.trim().is_empty() || segment.meaning.trim().is_empty() {
            report.skipped += 1;
        }
    }

    report
}

/// Attach `/ipa/` guides to segments that have none yet
pub fn add_ipa(file: &mut PassageFile, ipa: &IpaDictionary) -> FixReport {
    let mut report = FixReport::new("ipa");

    for segment in file.segments_mut() {
        if segment.ipa.as_deref().is_some_and(|g| !g.trim().is_empty()) {
            continue;
        }
        match ipa.guide(&segment.word) {
            Some(guide) => {
                report.sample(format!("{} {guide}", segment.word));
                segment.ipa = Some(guide);
                report.changed += 1;
            }
            None => report.skipped += 1,
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::reading::ReadingDictionary;

    const PASSAGE: &str = r#"{
        "title": "Morning",
        "level": "初級",
        "phrases": [{
            "words": ["Good", "morning", "teacher"],
            "japanese": "先生、おはようございます",
            "segments": [
                { "word": "morning", "reading": "", "meaning": "朝" },
                { "word": "teacher", "reading": "てぃーちゃー", "meaning": "" },
                { "word": "zzz", "reading": "", "meaning": "" }
            ]
        }]
    }"#;

    fn file() -> PassageFile {
        PassageFile::parse(Path::new("p.json"), PASSAGE).unwrap()
    }

    #[test]
    fn fills_readings_and_meanings() {
        let mut file = file();
        let filler = ReadingFiller::new(ReadingDictionary::with_defaults());
        let report = fill_segments(&mut file, &filler, &Glossary::with_defaults());

        let segments = &file.passages[0].phrases[0].segments;
        assert_eq!(segments[0].reading, "モーニング");
        assert_eq!(segments[1].reading, "ティーチャー");
        assert_eq!(segments[1].meaning, "先生");
        assert_eq!(report.changed, 3);
    }

    #[test]
    fn ipa_is_added_once() {
        let mut file = file();
        let ipa = IpaDictionary::with_defaults();

        let first = add_ipa(&mut file, &ipa);
        assert_eq!(first.changed, 2);
        assert_eq!(first.skipped, 1);
        assert_eq!(
            file.passages[0].phrases[0].segments[0].ipa.as_deref(),
            Some("/ˈmɔɹnɪŋ/")
        );

        let second = add_ipa(&mut file, &ipa);
        assert!(second.is_noop());
    }
}
