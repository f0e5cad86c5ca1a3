//! CLI for fetching BiGG models.

mod commands;
mod prompt;

use anyhow::Result;
use bigg_core::{config, logging, Fetcher};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use commands::{run_fetch, run_list, Choice};

/// Download a metabolic model (JSON) from BiGG into a local models directory.
///
/// With no flags, lists the available models and asks which one to fetch.
#[derive(Debug, Parser)]
#[command(name = "bigg-fetch")]
#[command(about = "Download BiGG metabolic models into ./models", long_about = None)]
pub struct Cli {
    /// Catalog key to fetch without prompting (e.g. "1").
    #[arg(long, conflicts_with = "model")]
    pub key: Option<String>,

    /// Fetch this BiGG model id directly, bypassing the catalog.
    #[arg(long, value_name = "ID")]
    pub model: Option<String>,

    /// Directory to save models in (default from config, else "models").
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the catalog and exit.
    #[arg(long, conflicts_with_all = ["key", "model"])]
    pub list: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = match config::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                logging::init_logging_stderr();
                return Err(e.context("loading config"));
            }
        };
        logging::init_logging(cfg.log_file.as_deref());
        tracing::debug!("loaded config: {:?}", cfg);

        let catalog = cfg.catalog()?;
        let mut opts = cfg.fetcher_options();
        if let Some(dir) = self.output_dir {
            opts.output_dir = dir;
        }
        let fetcher = Fetcher::new(catalog, opts);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.list {
            return run_list(fetcher.catalog(), &mut out);
        }

        let choice = match (self.key, self.model) {
            (Some(key), _) => Choice::Key(key),
            (None, Some(model)) => Choice::Model(model),
            (None, None) => {
                let stdin = io::stdin();
                let key = prompt::prompt_selection(fetcher.catalog(), stdin.lock(), &mut out)?;
                Choice::Key(key)
            }
        };

        run_fetch(&fetcher, &choice, &mut out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
