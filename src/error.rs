use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// インポート統一エラー型
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Couldn’t find “{}”!", .0.display())]
    FileNotFound(PathBuf),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{program}` could not be started: {source}")]
    StoreUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("store command failed for “{name}” ({status})")]
    StoreCommand { name: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, ImportError>;
