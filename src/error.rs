//! Error handling for electrolyte data loading.
//!
//! Only resource-level failures are errors. Malformed fields inside a row
//! degrade to zero and are filtered by the normalizer instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing failed for {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Data resource not found at path: {path}")]
    ResourceNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Loader task failed: {reason}")]
    TaskFailed { reason: String },
}

impl NormalizerError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a CSV error tied to the resource it came from
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
