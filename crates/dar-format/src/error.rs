//! Error types for DAR format operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with DAR files.
#[derive(Debug, Error)]
pub enum DarError {
    /// File I/O error (including a missing file)
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON
    #[error("File {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory or streamed input is not valid JSON
    #[error("Input is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Document is missing a member the operation requires
    #[error("Invalid DAR file: {0}")]
    InvalidStructure(#[from] SchemaViolation),

    /// Strict conversion into the typed model failed
    #[error("Document does not match the DAR model: {0}")]
    Model(#[source] serde_json::Error),

    /// Writing a document failed to serialize
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl DarError {
    /// Returns true if the error was caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DarError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// Returns true if the input could not be decoded as JSON.
    pub fn is_malformed_json(&self) -> bool {
        matches!(self, DarError::Json { .. } | DarError::Parse(_))
    }
}

/// A structural defect in a DAR document.
///
/// The `Display` output of each variant is the stable, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// Root is not an object with a `log` object
    #[error("Missing 'log' object.")]
    MissingLog,

    /// `log.version` absent or not a string
    #[error("Missing or invalid 'version' field in 'log' object.")]
    InvalidVersion,

    /// `log.creator` absent, not an object, or lacking `name`/`version`
    #[error("Missing or incomplete 'creator' object in 'log'.")]
    IncompleteCreator,

    /// `log.renders` absent or not a list
    #[error("Missing or invalid 'renders' object; must be a list.")]
    InvalidRenders,

    /// An element of `log.renders` is not an object
    #[error("Render object at index {index} is not an object.")]
    RenderNotObject { index: usize },

    /// A required render field is absent or not a string
    #[error("Missing or invalid '{field}' in render object at index {index}.")]
    InvalidRenderField { index: usize, field: &'static str },

    /// `log.result` absent or not an object
    #[error("Missing or invalid 'result' object; must be an object.")]
    InvalidResult,

    /// `result.summary` absent or not a string
    #[error("Missing or invalid 'summary' in 'result' object.")]
    InvalidSummary,

    /// `result.errors` present but not a list
    #[error("'errors' in 'result' should be a list if present.")]
    InvalidResultErrors,

    /// `result.metrics` present but not an object
    #[error("'metrics' in 'result' should be an object if present.")]
    InvalidMetrics,

    /// `log.entries` absent or not a list
    #[error("Missing or invalid 'entries' object; must be a list.")]
    InvalidEntries,
}

/// Result type for DAR operations.
pub type DarResult<T> = Result<T, DarError>;
