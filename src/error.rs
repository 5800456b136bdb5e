//! Error types for loading dictionaries, searching, and exporting results.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnagramError {
    #[error("dictionary file not found or unreadable: {path:?}")]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to allocate memo table of {requested_bytes} bytes")]
    MemoAllocationFailed { requested_bytes: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[cfg(feature = "cli")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cli")]
    #[error("unrecognized export format for {path:?}: expected a .csv or .json extension")]
    UnsupportedExportFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, AnagramError>;
