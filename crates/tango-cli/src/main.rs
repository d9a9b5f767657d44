use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tango_config::Config;
use tango_core::backup::BackupStyle;

pub mod commands;
pub mod logging;
pub mod prompt;
pub mod resources;
pub mod state;

use self::commands::{PassageCommand, Summary, VocabCommand};
use self::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "tango", version, about = "Clean, normalize and validate vocabulary data")]
struct Args {
    /// File to process (repeatable); defaults to every matching file in the data directory
    #[arg(short, long = "file", global = true)]
    files: Vec<PathBuf>,

    /// Directory scanned when no --file is given [env: TANGO_DATA_DIR]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Show what would change without writing anything
    #[arg(long, global = true)]
    dry_run: bool,

    /// Overwrite without asking
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Backup naming: suffix, timestamp, none, or tag:<name>
    #[arg(long, global = true)]
    backup: Option<String>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Less logging (-q warn, -qq error)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Repair header order and row widths
    Columns,
    /// Rewrite difficulty labels as 1, 2 or 3
    Difficulty,
    /// Reduce category cells to one canonical label
    Categories,
    /// Fill missing readings and convert kana/romaji readings to katakana
    Readings,
    /// Fill missing meanings from the glossary
    Meanings,
    /// Remove duplicate headwords
    Dedup,
    /// All vocabulary fixes in order
    Clean,
    /// Fill segment readings/meanings and add IPA guides to passage files
    Passages {
        /// Only add IPA guides
        #[arg(long)]
        ipa_only: bool,
    },
    /// Check vocabulary CSV files
    Validate,
    /// Check passage JSON files
    ValidatePassages,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let (mut config, config_error) = match Config::load_with(args.data_dir.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::new(), Some(e)),
    };

    let filter = logging::filter_for(&config.log_filter, args.verbose, args.quiet);
    logging::init_tracing(&filter, &config.log_format);

    if let Some(e) = config_error {
        tracing::warn!("Could not read profile, using defaults: {e}");
        if let Some(dir) = &args.data_dir {
            config.data_dir = dir.display().to_string();
        }
    }

    let backup = match &args.backup {
        Some(style) => match BackupStyle::parse(style, &config.backup.suffix) {
            Some(style) => style,
            None => {
                tracing::error!("Unknown backup style {style:?}");
                return ExitCode::from(2);
            }
        },
        None => BackupStyle::from_config(&config.backup),
    };

    let state = AppState::new(config, backup, args.dry_run, args.yes);
    let summary = run(&state, args.command, &args.files);
    summary.print();
    summary.exit_code()
}

fn run(state: &AppState, command: Command, files: &[PathBuf]) -> Summary {
    match command {
        Command::Columns => commands::fix_vocab(state, VocabCommand::Columns, files),
        Command::Difficulty => commands::fix_vocab(state, VocabCommand::Difficulty, files),
        Command::Categories => commands::fix_vocab(state, VocabCommand::Categories, files),
        Command::Readings => commands::fix_vocab(state, VocabCommand::Readings, files),
        Command::Meanings => commands::fix_vocab(state, VocabCommand::Meanings, files),
        Command::Dedup => commands::fix_vocab(state, VocabCommand::Dedup, files),
        Command::Clean => commands::fix_vocab(state, VocabCommand::Clean, files),
        Command::Passages { ipa_only } => {
            let command = if ipa_only {
                PassageCommand::IpaOnly
            } else {
                PassageCommand::Fill
            };
            commands::fix_passages(state, command, files)
        }
        Command::Validate => commands::validate_vocab(state, files),
        Command::ValidatePassages => commands::validate_passages(state, files),
    }
}
