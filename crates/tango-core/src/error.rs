use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TangoError>;

#[derive(Debug, thiserror::Error)]
pub enum TangoError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: malformed CSV: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: malformed JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),
}

impl TangoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            TangoError::MissingFile(path)
        } else {
            TangoError::Io { path, source }
        }
    }
}
