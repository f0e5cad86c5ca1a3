//! Interactive catalog selection.

use bigg_core::ModelCatalog;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Enter the number of the model to download: ";

/// Write the numbered catalog to `output`.
pub fn print_catalog<W: Write>(catalog: &ModelCatalog, output: &mut W) -> io::Result<()> {
    writeln!(output, "Available models:")?;
    for e in catalog.entries() {
        writeln!(output, "  {}: {}", e.key, e.model_id)?;
    }
    Ok(())
}

/// Show the catalog, ask once, return the raw line (trimmed). EOF yields an empty key.
pub fn prompt_selection<R: BufRead, W: Write>(
    catalog: &ModelCatalog,
    mut input: R,
    output: &mut W,
) -> io::Result<String> {
    print_catalog(catalog, output)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
