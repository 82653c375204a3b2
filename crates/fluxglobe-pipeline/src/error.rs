use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by dataset loading.
///
/// Load-level failures are fatal to that load attempt; per-record problems
/// are recovered locally and reported as [`RecordIssue`](crate::RecordIssue)
/// values instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("dataset '{path}' is not a JSON array of records: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
