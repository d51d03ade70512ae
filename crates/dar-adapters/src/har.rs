//! HAR adapter.
//!
//! Turns a HAR capture into a DAR document by stamping placeholder `renders`
//! and `result` members onto its `log`. Every other member passes through
//! untouched, in its original order.

use dar_format::{
    read_json, write_json_to_path, CrawlResult, DarError, DarResult, SchemaViolation,
};
use serde_json::{Map, Value};
use std::path::Path;

use crate::ConversionReport;

/// `log` members written by the converter
const STAMPED_KEYS: [&str; 2] = ["renders", "result"];

// ============================================================================
// Public API
// ============================================================================

/// Convert the HAR file at `input` into a DAR file at `output`.
///
/// Nothing is written unless the input parses and has a `log` object.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> DarResult<ConversionReport> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let mut document = read_json(input)?;
    let replaced = stamp(&mut document)?;
    write_json_to_path(&document, output)?;

    let entry_count = document["log"]["entries"]
        .as_array()
        .map(Vec::len)
        .unwrap_or(0);

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        entries = entry_count,
        "converted HAR to DAR"
    );

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        entry_count,
        replaced,
    })
}

/// Convert an in-memory HAR document.
pub fn convert_value(mut document: Value) -> DarResult<Value> {
    stamp(&mut document)?;
    Ok(document)
}

/// Set `log.renders` to an empty list and `log.result` to the completed result.
///
/// Existing `renders`/`result` members are overwritten; their names are
/// returned so callers can surface the replacement.
pub fn stamp(document: &mut Value) -> DarResult<Vec<&'static str>> {
    let log = log_object_mut(document)?;
    let result = serde_json::to_value(CrawlResult::completed()).map_err(DarError::Serialize)?;

    let replaced: Vec<&'static str> = STAMPED_KEYS
        .into_iter()
        .filter(|key| log.contains_key(*key))
        .collect();
    for key in &replaced {
        tracing::warn!(key = *key, "overwriting existing '{}' member in log", key);
    }

    log.insert("renders".to_string(), Value::Array(Vec::new()));
    log.insert("result".to_string(), result);

    Ok(replaced)
}

// ============================================================================
// Helpers
// ============================================================================

fn log_object_mut(document: &mut Value) -> DarResult<&mut Map<String, Value>> {
    document
        .get_mut("log")
        .and_then(Value::as_object_mut)
        .ok_or(DarError::InvalidStructure(SchemaViolation::MissingLog))
}
