use std::path::PathBuf;

use thiserror::Error;

/// Failure to persist benchmark results.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
