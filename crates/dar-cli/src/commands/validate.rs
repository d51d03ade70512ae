//! Validate command - Check a DAR file against the schema.

use anyhow::{Context, Result};
use dar_format::validate_path;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ValidationOutput<'a> {
    path: &'a Path,
    valid: bool,
    errors: Vec<String>,
}

pub fn run(path: &Path, json: bool) -> Result<()> {
    let result =
        validate_path(path).with_context(|| format!("Failed to read: {}", path.display()))?;

    if json {
        let output = ValidationOutput {
            path,
            valid: result.is_valid(),
            errors: result.messages(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", result.report());
    }

    if result.is_valid() {
        Ok(())
    } else {
        anyhow::bail!("Validation failed with {} error(s)", result.errors.len());
    }
}
