use std::fs;
use std::path::Path;

use anyhow::Context;
use tango_core::columns;
use tango_core::dedup::DedupFix;
use tango_core::difficulty::DifficultyFix;
use tango_core::fix::{Fix, FixReport, run_fixes};
use tango_core::taxonomy::CategoryFix;
use tango_core::vocab::VocabTable;
use tango_lang_japanese::{MeaningFix, ReadingFix};
use tango_types::VocabEntry;

use super::{Outcome, commit};
use crate::resources::Resources;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabCommand {
    Columns,
    Difficulty,
    Categories,
    Readings,
    Meanings,
    Dedup,
    /// Every fix above, in that order
    Clean,
}

/// Load, repair columns, apply the command's fixes, then commit the canonical CSV
pub fn process_file(
    state: &AppState,
    resources: &Resources,
    command: VocabCommand,
    path: &Path,
) -> anyhow::Result<Outcome> {
    let original = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let table = VocabTable::parse(path, &original)?;

    let (mut entries, columns_report) = columns::repair(&table);
    let mut reports = vec![columns_report];
    reports.extend(apply(resources, command, &mut entries));

    println!("{}:", path.display());
    for report in reports.iter().filter(|r| !r.is_noop() || r.skipped > 0) {
        println!("  {}", report.to_string().replace('\n', "\n  "));
    }

    let mut output = VocabTable::from_entries(path, &entries);
    output.bom = table.bom;
    let updated = output.to_csv_bytes()?;

    commit(state, path, &original, &updated)
}

/// Run the fixes a command stands for; column repair has already happened
pub fn apply(
    resources: &Resources,
    command: VocabCommand,
    entries: &mut Vec<VocabEntry>,
) -> Vec<FixReport> {
    let difficulty = DifficultyFix;
    let categories = CategoryFix {
        taxonomy: &resources.taxonomy,
    };
    let readings = ReadingFix {
        filler: &resources.filler,
    };
    let meanings = MeaningFix {
        glossary: &resources.glossary,
    };
    let dedup = DedupFix;

    let fixes: Vec<&dyn Fix> = match command {
        VocabCommand::Columns => vec![],
        VocabCommand::Difficulty => vec![&difficulty],
        VocabCommand::Categories => vec![&categories],
        VocabCommand::Readings => vec![&readings],
        VocabCommand::Meanings => vec![&meanings],
        VocabCommand::Dedup => vec![&dedup],
        VocabCommand::Clean => vec![&difficulty, &categories, &readings, &meanings, &dedup],
    };

    run_fixes(entries, &fixes)
}
