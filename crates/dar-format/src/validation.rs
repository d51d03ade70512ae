//! Validation utilities for DAR documents.
//!
//! Two checks with different contracts:
//! - [`validate_full`] walks the whole document and collects every defect.
//! - [`validate_minimal`] only checks what [`crate::DarFile`] needs and stops
//!   at the first defect.

use crate::file::read_json;
use crate::{
    DarResult, SchemaViolation, INVALID_DOCUMENT_HEADER, RENDER_FIELDS, VALID_DOCUMENT_MESSAGE,
};
use serde_json::{Map, Value};
use std::path::Path;

/// Validation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Every defect found, in check order
    pub errors: Vec<SchemaViolation>,
}

impl ValidationResult {
    /// Returns true if there are no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error messages, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Human-readable report: either the "valid" line or a bulleted error list.
    pub fn report(&self) -> String {
        if self.is_valid() {
            return VALID_DOCUMENT_MESSAGE.to_string();
        }

        let mut out = String::from(INVALID_DOCUMENT_HEADER);
        for error in &self.errors {
            out.push_str("\n- ");
            out.push_str(&error.to_string());
        }
        out
    }
}

/// Validate a DAR document, reporting every structural defect.
///
/// Checks run in a fixed order: `log`, `version`, `creator`, `renders` (then
/// each render by index), `result`, `entries`. A missing `log` is the only
/// defect that stops the walk.
pub fn validate_full(document: &Value) -> ValidationResult {
    let mut errors = Vec::new();

    let Some(log) = log_object(document) else {
        errors.push(SchemaViolation::MissingLog);
        return ValidationResult { errors };
    };

    if !log.get("version").is_some_and(Value::is_string) {
        errors.push(SchemaViolation::InvalidVersion);
    }

    // Key presence only for the creator's members
    let creator_complete = log
        .get("creator")
        .and_then(Value::as_object)
        .is_some_and(|c| c.contains_key("name") && c.contains_key("version"));
    if !creator_complete {
        errors.push(SchemaViolation::IncompleteCreator);
    }

    match log.get("renders").and_then(Value::as_array) {
        Some(renders) => {
            for (index, render) in renders.iter().enumerate() {
                check_render(index, render, &mut errors);
            }
        }
        None => errors.push(SchemaViolation::InvalidRenders),
    }

    match log.get("result").and_then(Value::as_object) {
        Some(result) => check_result(result, &mut errors),
        None => errors.push(SchemaViolation::InvalidResult),
    }

    if !log.get("entries").is_some_and(Value::is_array) {
        errors.push(SchemaViolation::InvalidEntries);
    }

    ValidationResult { errors }
}

/// Check the members a [`crate::DarFile`] relies on, stopping at the first defect.
pub fn validate_minimal(document: &Value) -> Result<(), SchemaViolation> {
    let log = log_object(document).ok_or(SchemaViolation::MissingLog)?;

    if !log.get("renders").is_some_and(Value::is_array) {
        return Err(SchemaViolation::InvalidRenders);
    }

    if !log.get("result").is_some_and(Value::is_object) {
        return Err(SchemaViolation::InvalidResult);
    }

    Ok(())
}

/// Load a DAR file and validate it with [`validate_full`].
///
/// I/O and JSON errors are logged and returned; schema defects are not errors
/// here, they are listed in the result.
pub fn validate_path<P: AsRef<Path>>(path: P) -> DarResult<ValidationResult> {
    let path = path.as_ref();
    let document = read_json(path)?;
    let result = validate_full(&document);
    tracing::debug!(
        path = %path.display(),
        errors = result.errors.len(),
        "validated DAR file"
    );
    Ok(result)
}

fn log_object(document: &Value) -> Option<&Map<String, Value>> {
    document.get("log").and_then(Value::as_object)
}

fn check_render(index: usize, render: &Value, errors: &mut Vec<SchemaViolation>) {
    let Some(render) = render.as_object() else {
        errors.push(SchemaViolation::RenderNotObject { index });
        return;
    };

    for field in RENDER_FIELDS {
        if !render.get(field).is_some_and(Value::is_string) {
            errors.push(SchemaViolation::InvalidRenderField { index, field });
        }
    }
}

fn check_result(result: &Map<String, Value>, errors: &mut Vec<SchemaViolation>) {
    if !result.get("summary").is_some_and(Value::is_string) {
        errors.push(SchemaViolation::InvalidSummary);
    }

    // null counts as absent for the optional members
    if let Some(list) = present(result, "errors") {
        if !list.is_array() {
            errors.push(SchemaViolation::InvalidResultErrors);
        }
    }

    if let Some(metrics) = present(result, "metrics") {
        if !metrics.is_object() {
            errors.push(SchemaViolation::InvalidMetrics);
        }
    }
}

fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(index: usize) -> Value {
        json!({
            "url": format!("https://example.com/{index}"),
            "status": "ok",
            "content": "<html></html>",
            "time": "2024-01-01T00:00:00Z"
        })
    }

    fn valid_document() -> Value {
        json!({
            "log": {
                "version": "1.2",
                "creator": { "name": "browser", "version": "1.0" },
                "pages": [],
                "entries": [],
                "renders": [render(0), render(1), render(2)],
                "result": {
                    "summary": "Crawl completed successfully",
                    "errors": [],
                    "metrics": { "pages": 3 }
                }
            }
        })
    }

    #[test]
    fn test_valid_document() {
        let result = validate_full(&valid_document());
        assert!(result.is_valid());
        assert_eq!(result.report(), VALID_DOCUMENT_MESSAGE);
    }

    #[test]
    fn test_missing_log_stops_walk() {
        let result = validate_full(&json!({ "renders": "nope" }));
        assert_eq!(result.errors, vec![SchemaViolation::MissingLog]);
    }

    #[test]
    fn test_non_object_log_counts_as_missing() {
        let result = validate_full(&json!({ "log": [1, 2] }));
        assert_eq!(result.errors, vec![SchemaViolation::MissingLog]);

        let result = validate_full(&json!("log"));
        assert_eq!(result.errors, vec![SchemaViolation::MissingLog]);
    }

    #[test]
    fn test_render_missing_status_reports_only_that_field() {
        let mut doc = valid_document();
        doc["log"]["renders"][2]
            .as_object_mut()
            .unwrap()
            .remove("status");

        let result = validate_full(&doc);
        assert_eq!(
            result.errors,
            vec![SchemaViolation::InvalidRenderField {
                index: 2,
                field: "status"
            }]
        );
        assert_eq!(
            result.messages(),
            vec!["Missing or invalid 'status' in render object at index 2.".to_string()]
        );
    }

    #[test]
    fn test_each_missing_field_is_reported_separately() {
        let mut doc = valid_document();
        for i in 0..2usize {
            doc["log"]["renders"][i].as_object_mut().unwrap().remove("url");
        }
        doc["log"]["renders"][2]["time"] = json!(42);

        let result = validate_full(&doc);
        assert_eq!(
            result.errors,
            vec![
                SchemaViolation::InvalidRenderField { index: 0, field: "url" },
                SchemaViolation::InvalidRenderField { index: 1, field: "url" },
                SchemaViolation::InvalidRenderField { index: 2, field: "time" },
            ]
        );
    }

    #[test]
    fn test_non_object_render_skips_field_checks() {
        let mut doc = valid_document();
        doc["log"]["renders"] = json!(["not a render", {}]);

        let result = validate_full(&doc);
        assert_eq!(
            result.errors,
            vec![
                SchemaViolation::RenderNotObject { index: 0 },
                SchemaViolation::InvalidRenderField { index: 1, field: "url" },
                SchemaViolation::InvalidRenderField { index: 1, field: "status" },
                SchemaViolation::InvalidRenderField { index: 1, field: "content" },
                SchemaViolation::InvalidRenderField { index: 1, field: "time" },
            ]
        );
    }

    #[test]
    fn test_errors_follow_check_order() {
        let doc = json!({
            "log": {
                "version": 1.2,
                "creator": { "name": "browser" },
                "renders": {},
                "result": { "errors": "boom", "metrics": [] }
            }
        });

        let result = validate_full(&doc);
        assert_eq!(
            result.errors,
            vec![
                SchemaViolation::InvalidVersion,
                SchemaViolation::IncompleteCreator,
                SchemaViolation::InvalidRenders,
                SchemaViolation::InvalidSummary,
                SchemaViolation::InvalidResultErrors,
                SchemaViolation::InvalidMetrics,
                SchemaViolation::InvalidEntries,
            ]
        );
    }

    #[test]
    fn test_creator_members_are_not_type_checked() {
        let mut doc = valid_document();
        doc["log"]["creator"] = json!({ "name": 7, "version": null });
        assert!(validate_full(&doc).is_valid());
    }

    #[test]
    fn test_result_not_object_skips_member_checks() {
        let mut doc = valid_document();
        doc["log"]["result"] = json!("done");
        assert_eq!(
            validate_full(&doc).errors,
            vec![SchemaViolation::InvalidResult]
        );
    }

    #[test]
    fn test_null_optional_result_members_are_absent() {
        let mut doc = valid_document();
        doc["log"]["result"] = json!({ "summary": "ok", "errors": null, "metrics": null });
        assert!(validate_full(&doc).is_valid());
    }

    #[test]
    fn test_empty_lists_are_valid() {
        let mut doc = valid_document();
        doc["log"]["renders"] = json!([]);
        doc["log"]["entries"] = json!([]);
        assert!(validate_full(&doc).is_valid());
    }

    #[test]
    fn test_report_lists_errors() {
        let mut doc = valid_document();
        doc["log"].as_object_mut().unwrap().remove("entries");
        doc["log"].as_object_mut().unwrap().remove("version");

        assert_eq!(
            validate_full(&doc).report(),
            "Validation failed with the following errors:\n\
             - Missing or invalid 'version' field in 'log' object.\n\
             - Missing or invalid 'entries' object; must be a list."
        );
    }

    #[test]
    fn test_minimal_stops_at_first_defect() {
        let doc = json!({ "log": { "renders": 1, "result": 2 } });
        assert_eq!(validate_minimal(&doc), Err(SchemaViolation::InvalidRenders));

        let doc = json!({ "log": { "renders": [], "result": [] } });
        assert_eq!(validate_minimal(&doc), Err(SchemaViolation::InvalidResult));

        assert_eq!(validate_minimal(&json!({})), Err(SchemaViolation::MissingLog));
    }

    #[test]
    fn test_minimal_ignores_other_members() {
        let doc = json!({ "log": { "renders": [42], "result": {} } });
        assert_eq!(validate_minimal(&doc), Ok(()));
    }
}
