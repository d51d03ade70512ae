//! # dar-format
//!
//! Core types, validation and parsing for the DAR format.
//!
//! DAR is an HTTP Archive (HAR) document whose `log` object carries two
//! extra members: `renders` (rendered-page snapshots) and `result` (the crawl
//! outcome). This crate provides:
//! - Typed model of a DAR document
//! - Exhaustive schema validation (`validate_full`)
//! - A fail-fast loader with read accessors (`DarFile`)
//! - JSON Schemas for the model (`document_schemas`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use dar_format::{validate_full, DarFile};
//!
//! // Load a DAR file and print its summary
//! let file = DarFile::from_path("crawl.dar")?;
//! println!("{}", file.summary());
//!
//! // Report every structural defect
//! let result = validate_full(file.value());
//! for message in result.messages() {
//!     println!("- {}", message);
//! }
//! # Ok::<(), dar_format::DarError>(())
//! ```

mod document;
mod error;
mod file;
mod schema;
mod validation;

pub use document::*;
pub use error::*;
pub use file::*;
pub use schema::{document_schemas, NamedSchema, SCHEMA_BASE_URI};
pub use validation::*;

/// File extension for DAR files
pub const FILE_EXTENSION: &str = "dar";

/// File extension for HAR files
pub const HAR_FILE_EXTENSION: &str = "har";

/// Indentation used when writing DAR documents
pub const OUTPUT_INDENT: &[u8] = b"    ";

/// Summary stamped into `result` by the HAR converter
pub const DEFAULT_RESULT_SUMMARY: &str = "Crawl completed successfully";

/// Summary reported when a document's `result` has none
pub const NO_SUMMARY_AVAILABLE: &str = "No summary available.";

/// Report line for a document with no validation errors
pub const VALID_DOCUMENT_MESSAGE: &str = "DAR file is valid and conforms to the schema.";

/// Header line for a report listing validation errors
pub const INVALID_DOCUMENT_HEADER: &str = "Validation failed with the following errors:";

/// Required string fields of every render object, in check order
pub const RENDER_FIELDS: [&str; 4] = ["url", "status", "content", "time"];
