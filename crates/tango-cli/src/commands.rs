use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use tango_config::PROFILE_FILE;
use tango_core::backup::write_with_backup;

use crate::prompt::confirm_overwrite;
use crate::resources::Resources;
use crate::state::AppState;

pub mod passages;
pub mod validate;
pub mod vocab;

pub use passages::PassageCommand;
pub use vocab::VocabCommand;

/// Totals for one invocation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    /// Files rewritten, or that would be with `--dry-run`
    pub changed: usize,
    /// Files that could not be read, parsed or written
    pub failed: usize,
    pub violations: usize,
    /// Validation run rather than a fix run
    pub validating: bool,
}

impl Summary {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    pub fn code(&self) -> u8 {
        if self.files == 0 || self.failed > 0 {
            2
        } else if self.violations > 0 {
            1
        } else {
            0
        }
    }

    pub fn print(&self) {
        if self.files == 0 {
            return;
        }
        if self.validating {
            println!(
                "{} file(s) checked, {} violation(s), {} failed",
                self.files, self.violations, self.failed
            );
        } else {
            println!(
                "{} file(s) processed, {} changed, {} failed",
                self.files, self.changed, self.failed
            );
        }
    }
}

/// What happened to one file after its fixes ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    /// `--dry-run`: the file would have been rewritten
    WouldChange,
    Written { backup: Option<PathBuf> },
    Declined,
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        matches!(self, Outcome::WouldChange | Outcome::Written { .. })
    }
}

/// Files named with `--file`, else every `*.<extension>` in the data directory
pub fn collect_targets(files: &[PathBuf], data_dir: &Path, extension: &str) -> Vec<PathBuf> {
    if !files.is_empty() {
        return files.to_vec();
    }

    let dir = match fs::read_dir(data_dir) {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("Cannot read data directory {}: {e}", data_dir.display());
            return Vec::new();
        }
    };

    let mut targets: Vec<PathBuf> = dir
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .filter(|path| path.file_name().and_then(|n| n.to_str()) != Some(PROFILE_FILE))
        .collect();
    targets.sort();
    targets
}

fn targets(state: &AppState, files: &[PathBuf], extension: &str) -> Vec<PathBuf> {
    let targets = collect_targets(files, Path::new(&state.config.data_dir), extension);
    if targets.is_empty() {
        tracing::error!(
            "No *.{extension} files to process; pass --file or set TANGO_DATA_DIR"
        );
    }
    targets
}

/// Write `updated` over `path` if it differs from `original`, honoring dry-run and the prompt
pub fn commit(
    state: &AppState,
    path: &Path,
    original: &[u8],
    updated: &[u8],
) -> anyhow::Result<Outcome> {
    if original == updated {
        return Ok(Outcome::Unchanged);
    }

    if state.dry_run {
        return Ok(Outcome::WouldChange);
    }

    if !confirm_overwrite(path, state.assume_yes) {
        tracing::info!("Left {} untouched", path.display());
        return Ok(Outcome::Declined);
    }

    let backup = write_with_backup(path, updated, &state.backup)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(Outcome::Written { backup })
}

fn report_outcome(path: &Path, outcome: &Outcome) {
    match outcome {
        Outcome::Unchanged => println!("{}: already clean", path.display()),
        Outcome::WouldChange => println!("{}: would be rewritten (dry run)", path.display()),
        Outcome::Written { backup: Some(backup) } => {
            println!("{}: written, backup at {}", path.display(), backup.display())
        }
        Outcome::Written { backup: None } => println!("{}: written", path.display()),
        Outcome::Declined => println!("{}: skipped", path.display()),
    }
}

/// Run a vocabulary fix over every target CSV
pub fn fix_vocab(state: &AppState, command: VocabCommand, files: &[PathBuf]) -> Summary {
    let resources = Resources::load(&state.config);
    let mut summary = Summary::default();

    for path in targets(state, files, "csv") {
        summary.files += 1;
        match vocab::process_file(state, &resources, command, &path) {
            Ok(outcome) => {
                report_outcome(&path, &outcome);
                if outcome.is_change() {
                    summary.changed += 1;
                }
            }
            Err(e) => {
                tracing::error!("{}: {e:#}", path.display());
                summary.failed += 1;
            }
        }
    }

    summary
}

/// Fill passage segments over every target JSON file
pub fn fix_passages(state: &AppState, command: PassageCommand, files: &[PathBuf]) -> Summary {
    let resources = Resources::load(&state.config);
    let mut summary = Summary::default();

    for path in targets(state, files, "json") {
        summary.files += 1;
        match passages::process_file(state, &resources, command, &path) {
            Ok(outcome) => {
                report_outcome(&path, &outcome);
                if outcome.is_change() {
                    summary.changed += 1;
                }
            }
            Err(e) => {
                tracing::error!("{}: {e:#}", path.display());
                summary.failed += 1;
            }
        }
    }

    summary
}

pub fn validate_vocab(state: &AppState, files: &[PathBuf]) -> Summary {
    let resources = Resources::load(&state.config);
    let mut summary = Summary {
        validating: true,
        ..Default::default()
    };

    for path in targets(state, files, "csv") {
        summary.files += 1;
        match validate::check_vocab(state, &resources, &path) {
            Ok(count) => summary.violations += count,
            Err(e) => {
                tracing::error!("{}: {e:#}", path.display());
                summary.failed += 1;
            }
        }
    }

    summary
}

pub fn validate_passages(state: &AppState, files: &[PathBuf]) -> Summary {
    let mut summary = Summary {
        validating: true,
        ..Default::default()
    };

    for path in targets(state, files, "json") {
        summary.files += 1;
        match validate::check_passages(&path) {
            Ok(count) => summary.violations += count,
            Err(e) => {
                tracing::error!("{}: {e:#}", path.display());
                summary.failed += 1;
            }
        }
    }

    summary
}
