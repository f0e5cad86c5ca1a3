//! Error type shared by the fetch pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Every way a single fetch can fail. None of them is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The chosen key is not in the catalog. Raised before any I/O.
    #[error("invalid selection '{key}'")]
    InvalidSelection { key: String },

    /// The model id cannot be used as a file stem (only reachable through config or `--model`).
    #[error("invalid model id '{model_id}'")]
    InvalidModelId { model_id: String },

    /// Curl could not complete the transfer, or the server answered with a non-2xx status.
    #[error("failed to download {url}: {reason}")]
    NetworkFailure { url: String, reason: String },

    /// Filesystem failure while creating the output dir or writing the model.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
