use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tango_config::backup::BackupConfig;

use crate::error::{Result, TangoError};

/// How the pre-run copy of a file is named
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStyle {
    /// Overwrite without a copy
    None,
    /// `<file>.<suffix>`, e.g. `words.csv.bak`
    Suffix(String),
    /// `<file>.bak.<YYYYMMDDHHMMSS>`
    Timestamped,
    /// `<file>.<tag>.bak`, e.g. `words.csv.preaugment.bak`
    Tagged(String),
}

impl BackupStyle {
    /// Parse `none`, `suffix`, `timestamp` or `tag:<name>`
    pub fn parse(style: &str, suffix: &str) -> Option<Self> {
        match style.trim() {
            "none" | "off" => Some(BackupStyle::None),
            "suffix" | "bak" => Some(BackupStyle::Suffix(suffix.to_string())),
            "timestamp" | "timestamped" => Some(BackupStyle::Timestamped),
            other => other
                .strip_prefix("tag:")
                .filter(|tag| !tag.is_empty())
                .map(|tag| BackupStyle::Tagged(tag.to_string())),
        }
    }

    pub fn from_config(config: &BackupConfig) -> Self {
        Self::parse(&config.style, &config.suffix).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown backup style {:?}, using .{}",
                config.style,
                config.suffix
            );
            BackupStyle::Suffix(config.suffix.clone())
        })
    }
}

/// Name of the backup for `path`, or `None` when backups are off
pub fn backup_path(path: &Path, style: &BackupStyle, now: DateTime<Local>) -> Option<PathBuf> {
    let extension = match style {
        BackupStyle::None => return None,
        BackupStyle::Suffix(suffix) => suffix.clone(),
        BackupStyle::Timestamped => format!("bak.{}", now.format("%Y%m%d%H%M%S")),
        BackupStyle::Tagged(tag) => format!("{tag}.bak"),
    };

    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    Some(PathBuf::from(name))
}

/// Copy `path` to its backup name; the copy is byte-for-byte
pub fn create_backup(path: &Path, style: &BackupStyle) -> Result<Option<PathBuf>> {
    let Some(target) = backup_path(path, style, Local::now()) else {
        return Ok(None);
    };

    fs::copy(path, &target).map_err(|e| TangoError::io(path, e))?;
    tracing::info!("Backed up {} to {}", path.display(), target.display());
    Ok(Some(target))
}

/// Back up the current file (if any), then replace it with `bytes`
pub fn write_with_backup(path: &Path, bytes: &[u8], style: &BackupStyle) -> Result<Option<PathBuf>> {
    let backup = if path.exists() {
        create_backup(path, style)?
    } else {
        None
    };

    let tmp = temp_sibling(path);
    fs::write(&tmp, bytes).map_err(|e| TangoError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(TangoError::io(path, e));
    }

    Ok(backup)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn names_follow_suffix_conventions() {
        let path = Path::new("data/words.csv");
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        let name = |style| backup_path(path, &style, now).unwrap();
        assert_eq!(name(BackupStyle::Suffix("bak".into())), Path::new("data/words.csv.bak"));
        assert_eq!(name(BackupStyle::Timestamped), Path::new("data/words.csv.bak.20240309140507"));
        assert_eq!(
            name(BackupStyle::Tagged("preaugment".into())),
            Path::new("data/words.csv.preaugment.bak")
        );
        assert!(backup_path(path, &BackupStyle::None, now).is_none());
    }

    #[test]
    fn parses_style_names() {
        assert_eq!(BackupStyle::parse("none", "bak"), Some(BackupStyle::None));
        assert_eq!(
            BackupStyle::parse("tag:single", "bak"),
            Some(BackupStyle::Tagged("single".into()))
        );
        assert_eq!(BackupStyle::parse("tag:", "bak"), None);
        assert_eq!(BackupStyle::parse("zip", "bak"), None);
    }

    #[test]
    fn backup_matches_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");
        let original = "\u{feff}単語,読み\r\napple,アップル\r\n".as_bytes().to_vec();
        fs::write(&path, &original).unwrap();

        let style = BackupStyle::Suffix("bak".into());
        let backup = write_with_backup(&path, b"new contents\n", &style)
            .unwrap()
            .unwrap();

        assert_eq!(fs::read(&backup).unwrap(), original);
        assert_eq!(fs::read(&path).unwrap(), b"new contents\n");
        assert!(!temp_sibling(&path).exists());
    }

    #[test]
    fn new_file_gets_no_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.json");
        let backup = write_with_backup(&path, b"{}", &BackupStyle::Timestamped).unwrap();
        assert!(backup.is_none());
        assert!(path.exists());
    }
}
