use std::fs;
use std::path::Path;

use anyhow::Context;
use tango_core::fix::FixReport;
use tango_core::passage::PassageFile;
use tango_lang_japanese::{add_ipa, fill_segments};

use super::{Outcome, commit};
use crate::resources::Resources;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassageCommand {
    /// Readings, meanings, then IPA
    Fill,
    IpaOnly,
}

pub fn process_file(
    state: &AppState,
    resources: &Resources,
    command: PassageCommand,
    path: &Path,
) -> anyhow::Result<Outcome> {
    let original =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut file = PassageFile::parse(path, &original)?;

    let mut reports = Vec::new();
    if command == PassageCommand::Fill {
        reports.push(fill_segments(&mut file, &resources.filler, &resources.glossary));
    }
    reports.push(add_ipa(&mut file, &resources.ipa));

    println!("{}:", path.display());
    for report in reports.iter().filter(|r| !r.is_noop() || r.skipped > 0) {
        println!("  {}", report.to_string().replace('\n', "\n  "));
    }

    // Only formatting would differ; leave the file byte-for-byte as it is
    if reports.iter().all(FixReport::is_noop) {
        return Ok(Outcome::Unchanged);
    }

    let updated = file.to_json_bytes()?;
    commit(state, path, original.as_bytes(), &updated)
}
