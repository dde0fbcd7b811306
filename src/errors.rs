//! Error types for the enrichment run

use std::path::PathBuf;
use thiserror::Error;

/// Every failure is fatal for the run; nothing is retried or partially written.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, or a required field (`events`, `name`) is missing
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize events document")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EnrichError>;
