//! Convert command - Turn a HAR capture into a DAR file.

use anyhow::{Context, Result};
use dar_adapters::har;
use dar_format::{FILE_EXTENSION, HAR_FILE_EXTENSION};
use std::path::Path;

pub fn run(input: &Path, output: &Path) -> Result<()> {
    if !has_extension(input, HAR_FILE_EXTENSION) {
        tracing::warn!(input = %input.display(), "input does not have a .har extension");
    }
    if !has_extension(output, FILE_EXTENSION) {
        tracing::warn!(output = %output.display(), "output does not have a .dar extension");
    }

    let report = har::convert(input, output).with_context(|| {
        format!(
            "Error converting {} to {}",
            input.display(),
            output.display()
        )
    })?;

    for key in &report.replaced {
        println!("Note: replaced existing '{}' in log", key);
    }
    println!(
        "Converted {} to {} successfully.",
        report.input.display(),
        report.output.display()
    );

    Ok(())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().map(|e| e == ext).unwrap_or(false)
}
