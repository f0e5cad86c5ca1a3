//! The fetch-and-cache sequence.
//!
//! resolve key → ensure output dir → cache short-circuit → GET → atomic write.
//! Invalid selections fail before touching the filesystem or network.

use crate::catalog::ModelCatalog;
use crate::error::FetchError;
use crate::http::{self, HttpOptions};
use crate::request::{DownloadRequest, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use crate::storage;
use std::path::PathBuf;

/// Where to fetch from, where to write, and how to talk HTTP.
#[derive(Debug, Clone)]
pub struct FetcherOptions {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub http: HttpOptions,
}

impl Default for FetcherOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            http: HttpOptions::default(),
        }
    }
}

/// Successful end states of a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The body was downloaded and written to `path`.
    Downloaded { path: PathBuf, bytes: u64 },
    /// `path` already existed; no request was made.
    AlreadyCached { path: PathBuf },
}

impl FetchOutcome {
    pub fn path(&self) -> &std::path::Path {
        match self {
            FetchOutcome::Downloaded { path, .. } | FetchOutcome::AlreadyCached { path } => path,
        }
    }
}

pub struct Fetcher {
    catalog: ModelCatalog,
    opts: FetcherOptions,
}

impl Fetcher {
    pub fn new(catalog: ModelCatalog, opts: FetcherOptions) -> Self {
        Self { catalog, opts }
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &FetcherOptions {
        &self.opts
    }

    /// Map a catalog key to its download request without any I/O.
    pub fn resolve(&self, key: &str) -> Result<DownloadRequest, FetchError> {
        let model_id = self
            .catalog
            .lookup(key)
            .ok_or_else(|| FetchError::InvalidSelection {
                key: key.trim().to_string(),
            })?;
        self.resolve_model(model_id)
    }

    /// Fetch the model behind catalog `key`.
    pub fn fetch(&self, key: &str) -> Result<FetchOutcome, FetchError> {
        let req = self.resolve(key)?;
        self.run(&req)
    }

    /// Fetch a model by id, bypassing the catalog.
    pub fn fetch_model(&self, model_id: &str) -> Result<FetchOutcome, FetchError> {
        let req = self.resolve_model(model_id)?;
        self.run(&req)
    }

    /// Download request for a raw model id, bypassing the catalog.
    pub fn resolve_model(&self, model_id: &str) -> Result<DownloadRequest, FetchError> {
        DownloadRequest::new(&self.opts.base_url, &self.opts.output_dir, model_id)
    }

    /// Runs a resolved request. Exposed so callers can announce the URL between
    /// `resolve` and the transfer.
    pub fn run(&self, req: &DownloadRequest) -> Result<FetchOutcome, FetchError> {
        storage::ensure_dir(&self.opts.output_dir)?;

        if storage::is_cached(&req.destination_path)? {
            tracing::info!(
                model = %req.model_id,
                path = %req.destination_path.display(),
                "already cached, skipping download"
            );
            return Ok(FetchOutcome::AlreadyCached {
                path: req.destination_path.clone(),
            });
        }

        tracing::info!(model = %req.model_id, url = %req.url, "downloading model");
        let body = http::http_get(&req.url, &self.opts.http)?;
        storage::write_atomic(&req.destination_path, &body)?;
        tracing::info!(
            path = %req.destination_path.display(),
            bytes = body.len(),
            "model saved"
        );

        Ok(FetchOutcome::Downloaded {
            path: req.destination_path.clone(),
            bytes: body.len() as u64,
        })
    }
}
