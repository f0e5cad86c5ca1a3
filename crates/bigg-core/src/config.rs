//! Optional TOML configuration from the XDG config dir.
//!
//! A missing file means defaults; the file is never created.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{CatalogEntry, ModelCatalog};
use crate::fetcher::FetcherOptions;
use crate::http::{HttpOptions, BROWSER_USER_AGENT};
use crate::request::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};

const APP_PREFIX: &str = "bigg-fetch";
const CONFIG_FILE: &str = "config.toml";

/// Optional configuration loaded from `~/.config/bigg-fetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Scheme and host models are fetched from.
    pub base_url: String,
    /// Directory models are written to, relative to the working directory unless absolute.
    pub output_dir: PathBuf,
    /// `User-Agent` sent with the GET.
    pub user_agent: String,
    /// Connect timeout in seconds (None = libcurl default).
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no limit).
    pub timeout_secs: Option<u64>,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Replaces the built-in catalog when present.
    pub catalog: Option<Vec<CatalogEntry>>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: BROWSER_USER_AGENT.to_string(),
            connect_timeout_secs: None,
            timeout_secs: None,
            log_file: None,
            catalog: None,
        }
    }
}

impl FetchConfig {
    pub fn fetcher_options(&self) -> FetcherOptions {
        FetcherOptions {
            base_url: self.base_url.clone(),
            output_dir: self.output_dir.clone(),
            http: HttpOptions {
                user_agent: self.user_agent.clone(),
                connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
                timeout: self.timeout_secs.map(Duration::from_secs),
            },
        }
    }

    /// Configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<ModelCatalog> {
        match &self.catalog {
            Some(entries) => {
                ModelCatalog::from_entries(entries.clone()).context("invalid [[catalog]] in config")
            }
            None => Ok(ModelCatalog::builtin()),
        }
    }
}

/// Existing config file in the XDG config dirs, if any. Never creates directories.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.find_config_file(CONFIG_FILE))
}

/// Load configuration from the XDG config dir, or defaults when no file exists.
pub fn load() -> Result<FetchConfig> {
    match config_path()? {
        Some(path) => load_from_path(&path),
        None => Ok(FetchConfig::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
