//! Fetch one model and report the outcome on stdout.

use anyhow::Result;
use bigg_core::storage;
use bigg_core::{FetchOutcome, Fetcher};
use std::io::Write;

/// What the user asked for: a catalog key or a raw model id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Key(String),
    Model(String),
}

pub fn run_fetch<W: Write>(fetcher: &Fetcher, choice: &Choice, out: &mut W) -> Result<FetchOutcome> {
    let req = match choice {
        Choice::Key(key) => fetcher.resolve(key)?,
        Choice::Model(id) => fetcher.resolve_model(id)?,
    };

    if matches!(storage::is_cached(&req.destination_path), Ok(false)) {
        writeln!(out, "Downloading {} from {}...", req.model_id, req.url)?;
        out.flush()?;
    }

    let outcome = fetcher.run(&req)?;
    match &outcome {
        FetchOutcome::Downloaded { path, .. } => {
            writeln!(out, "Model downloaded and saved as {}", path.display())?;
        }
        FetchOutcome::AlreadyCached { path } => {
            writeln!(out, "{} already exists; skipping download.", path.display())?;
        }
    }
    Ok(outcome)
}
