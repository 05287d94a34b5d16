//! Errors for the fallible surfaces: catalog files and CLI input.
//! Risk generation itself has no failure modes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
