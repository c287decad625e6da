use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TexthlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read '{path}': {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Binary file detected: {0}")]
    BinaryFile(PathBuf),

    #[error("File too large: {path} ({size_mb:.1} MB)")]
    FileTooLarge { path: PathBuf, size_mb: f64 },

    #[error("{failed} of {total} input(s) could not be searched")]
    InputsFailed { failed: usize, total: usize },

    #[error("Logger initialization failed: {0}")]
    Logger(String),
}

impl From<anyhow::Error> for TexthlError {
    fn from(err: anyhow::Error) -> Self {
        TexthlError::Config(format!("{err:#}"))
    }
}

pub type Result<T> = std::result::Result<T, TexthlError>;
