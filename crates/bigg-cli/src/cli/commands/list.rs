//! `bigg-fetch --list` – print the catalog.

use anyhow::Result;
use bigg_core::ModelCatalog;
use std::io::Write;

use crate::cli::prompt::print_catalog;

pub fn run_list<W: Write>(catalog: &ModelCatalog, out: &mut W) -> Result<()> {
    print_catalog(catalog, out)?;
    Ok(())
}
