use std::path::Path;

use tango_core::passage::PassageFile;
use tango_core::validate::{self, ReadingScript, Violation};
use tango_core::vocab::VocabTable;
use tango_lang_japanese::Katakana;

use crate::resources::Resources;
use crate::state::AppState;

/// Print every violation in a vocabulary file and return how many there were
pub fn check_vocab(state: &AppState, resources: &Resources, path: &Path) -> anyhow::Result<usize> {
    let table = VocabTable::read(path)?;
    let script: &dyn ReadingScript = &Katakana;
    let violations = validate::validate_vocab(
        &table,
        &state.config.validation,
        &resources.taxonomy,
        Some(script),
    );
    Ok(print(path, &violations))
}

pub fn check_passages(path: &Path) -> anyhow::Result<usize> {
    let file = PassageFile::read(path)?;
    let violations = validate::validate_passages(&file);
    Ok(print(path, &violations))
}

fn print(path: &Path, violations: &[Violation]) -> usize {
    if violations.is_empty() {
        println!("{}: ok", path.display());
    }
    for violation in violations {
        println!("{violation}");
    }
    violations.len()
}
