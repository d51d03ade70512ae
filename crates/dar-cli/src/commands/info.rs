//! Info command - Show a DAR file's summary.

use anyhow::{Context, Result};
use dar_format::DarFile;
use std::path::Path;

pub fn run(path: &Path, json: bool) -> Result<()> {
    let file =
        DarFile::from_path(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    let summary = file.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }

    Ok(())
}
