use tango_config::Config;
use tango_core::backup::BackupStyle;

pub struct AppState {
    pub config: Config,
    pub backup: BackupStyle,
    /// Report changes without writing
    pub dry_run: bool,
    /// Skip the overwrite prompt
    pub assume_yes: bool,
}

impl AppState {
    pub fn new(config: Config, backup: BackupStyle, dry_run: bool, assume_yes: bool) -> Self {
        Self {
            config,
            backup,
            dry_run,
            assume_yes,
        }
    }
}
