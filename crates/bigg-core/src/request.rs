//! Download request derivation: model URL and local destination path.
//!
//! Both are pure functions of their inputs, so the same model id always maps
//! to the same file and the same remote resource.

use crate::error::FetchError;
use std::path::{Path, PathBuf};

/// Default BiGG host. Plain HTTP, as served by the public repository.
pub const DEFAULT_BASE_URL: &str = "http://bigg.ucsd.edu";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "models";

const MODEL_EXT: &str = ".json";

/// Longest id that still leaves room for `.json.part` under Linux NAME_MAX.
const MAX_MODEL_ID_LEN: usize = 255 - ".json.part".len();

/// A resolved fetch: what to download and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub model_id: String,
    pub url: String,
    pub destination_path: PathBuf,
}

impl DownloadRequest {
    /// Derive the URL and destination for `model_id`.
    ///
    /// Fails with `InvalidModelId` when the id is not a plain file stem, and with
    /// `NetworkFailure` when `base_url` does not produce a parseable URL.
    pub fn new(base_url: &str, output_dir: &Path, model_id: &str) -> Result<Self, FetchError> {
        validate_model_id(model_id)?;
        let url = model_url(base_url, model_id);
        if let Err(e) = url::Url::parse(&url) {
            return Err(FetchError::NetworkFailure {
                url,
                reason: format!("invalid URL: {}", e),
            });
        }
        Ok(Self {
            model_id: model_id.to_string(),
            url,
            destination_path: destination_path(output_dir, model_id),
        })
    }
}

/// `<base>/static/models/<model_id>.json`. A trailing `/` on `base_url` is ignored.
pub fn model_url(base_url: &str, model_id: &str) -> String {
    format!(
        "{}/static/models/{}{}",
        base_url.trim_end_matches('/'),
        model_id,
        MODEL_EXT
    )
}

/// `<output_dir>/<model_id>.json`.
pub fn destination_path(output_dir: &Path, model_id: &str) -> PathBuf {
    output_dir.join(format!("{}{}", model_id, MODEL_EXT))
}

/// Rejects ids that would escape the output dir, are not valid Linux filenames,
/// or would change meaning once pasted into the URL path.
fn validate_model_id(model_id: &str) -> Result<(), FetchError> {
    let bad = model_id.is_empty()
        || model_id == "."
        || model_id == ".."
        || model_id.len() > MAX_MODEL_ID_LEN
        || model_id
            .chars()
            .any(|c| is_path_char(c) || is_url_meta(c) || c.is_control() || c.is_whitespace());
    if bad {
        return Err(FetchError::InvalidModelId {
            model_id: model_id.to_string(),
        });
    }
    Ok(())
}

fn is_path_char(c: char) -> bool {
    matches!(c, '\0' | '/' | '\\')
}

/// Query, fragment and escape introducers.
fn is_url_meta(c: char) -> bool {
    matches!(c, '?' | '#' | '%')
}
