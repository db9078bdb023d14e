use std::path::PathBuf;

use biosite_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown product line `{0}`")]
    UnknownLine(String),

    #[error("invalid entry {line}/{model}: {source}")]
    InvalidEntry {
        line: String,
        model: String,
        #[source]
        source: DomainError,
    },
}
