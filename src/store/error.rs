use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in store snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed store snapshot: {message}")]
    Format { message: String },

    #[error("Malformed record '{id}': {source}")]
    MalformedRecord {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
