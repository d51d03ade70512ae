//! Typed model of a DAR document.
//!
//! A DAR document is a HAR document whose `log` also carries `renders` and
//! `result`. Required members are plain fields, optional members are `Option`,
//! and unknown members are kept in `extra` so a document survives a round trip.
//! Members that [`crate::validate_full`] checks for presence only are held as
//! raw [`Value`]s, so any document the validator accepts converts into the model.
//!
//! Conversion stops at the first defect. Use [`crate::validate_full`] to list
//! every defect instead.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::schema;
use crate::{DarError, DarResult, DEFAULT_RESULT_SUMMARY};

/// Root of a DAR document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct DarDocument {
    /// The archive log
    pub log: DarLog,

    /// Unknown top-level members
    #[serde(flatten)]
    #[schemars(schema_with = "schema::json_object")]
    pub extra: Map<String, Value>,
}

impl DarDocument {
    /// Convert a parsed JSON value into the typed model.
    pub fn from_value(value: Value) -> DarResult<Self> {
        serde_json::from_value(value).map_err(DarError::Model)
    }

    /// Convert the document back into a JSON value.
    pub fn to_value(&self) -> DarResult<Value> {
        serde_json::to_value(self).map_err(DarError::Serialize)
    }
}

/// The `log` object of a DAR document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct DarLog {
    /// HAR format version (e.g., "1.2")
    pub version: String,
    /// Tool that produced the capture
    pub creator: Creator,
    /// Pages captured (opaque, unchecked)
    #[serde(
        default,
        deserialize_with = "keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "schema::any_json")]
    pub pages: Option<Value>,
    /// HTTP request entries (opaque)
    #[schemars(schema_with = "schema::json_array")]
    pub entries: Vec<Value>,
    /// Rendered-page snapshots
    pub renders: Vec<Render>,
    /// Crawl outcome
    pub result: CrawlResult,

    #[serde(flatten)]
    #[schemars(schema_with = "schema::json_object")]
    pub extra: Map<String, Value>,
}

/// Tool that produced the capture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Creator {
    /// Only presence is required
    #[schemars(schema_with = "schema::any_json")]
    pub name: Value,
    #[schemars(schema_with = "schema::any_json")]
    pub version: Value,

    #[serde(flatten)]
    #[schemars(schema_with = "schema::json_object")]
    pub extra: Map<String, Value>,
}

/// A single page render attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Render {
    /// URL that was rendered
    pub url: String,
    /// Outcome of the render
    pub status: String,
    /// Rendered content
    pub content: String,
    /// When the render happened
    pub time: String,

    #[serde(flatten)]
    #[schemars(schema_with = "schema::json_object")]
    pub extra: Map<String, Value>,
}

impl Render {
    pub fn new(
        url: impl Into<String>,
        status: impl Into<String>,
        content: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            status: status.into(),
            content: content.into(),
            time: time.into(),
            extra: Map::new(),
        }
    }
}

/// Outcome of a crawl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct CrawlResult {
    /// Human-readable outcome
    pub summary: String,
    /// Errors raised during the crawl (`null` reads as absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "schema::json_array")]
    pub errors: Option<Vec<Value>>,
    /// Free-form crawl metrics (`null` reads as absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "schema::json_object")]
    pub metrics: Option<Map<String, Value>>,

    #[serde(flatten)]
    #[schemars(schema_with = "schema::json_object")]
    pub extra: Map<String, Value>,
}

impl CrawlResult {
    /// The placeholder result stamped onto converted HAR files.
    pub fn completed() -> Self {
        Self {
            summary: DEFAULT_RESULT_SUMMARY.to_string(),
            errors: None,
            metrics: None,
            extra: Map::new(),
        }
    }
}

/// Present members become `Some`, including an explicit `null`.
fn keep_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
