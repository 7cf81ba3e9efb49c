use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexingError>;

#[derive(Debug, Error)]
pub enum IndexingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service account key not found: {path}")]
    MissingKeyFile { path: PathBuf },

    #[error("service account key is missing field: {field}")]
    IncompleteKey { field: &'static str },

    #[error("no access token available: {message}")]
    MissingToken { message: String },

    #[error("endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },
}
