//! Reading and writing DAR files.

use crate::{
    validate_minimal, DarDocument, DarError, DarResult, NO_SUMMARY_AVAILABLE, OUTPUT_INDENT,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// A loaded DAR file.
///
/// Loading checks only that `log`, `log.renders` and `log.result` have the
/// right shape; everything else is read leniently by the accessors.
#[derive(Debug, Clone)]
pub struct DarFile {
    path: Option<PathBuf>,
    document: Value,
}

impl DarFile {
    /// Read a DAR file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> DarResult<Self> {
        let path = path.as_ref();
        let document = read_json(path)?;
        validate_minimal(&document)?;
        tracing::debug!(path = %path.display(), "loaded DAR file");
        Ok(Self {
            path: Some(path.to_path_buf()),
            document,
        })
    }

    /// Read a DAR document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> DarResult<Self> {
        let document = serde_json::from_reader(reader).map_err(DarError::Parse)?;
        Self::from_value(document)
    }

    /// Wrap an already-parsed document.
    pub fn from_value(document: Value) -> DarResult<Self> {
        validate_minimal(&document)?;
        Ok(Self {
            path: None,
            document,
        })
    }

    /// Path the file was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The raw document.
    pub fn value(&self) -> &Value {
        &self.document
    }

    /// Render objects (possibly empty).
    pub fn renders(&self) -> &[Value] {
        self.log_array("renders")
    }

    /// HTTP request entries (empty if absent).
    pub fn entries(&self) -> &[Value] {
        self.log_array("entries")
    }

    /// The result summary, or [`NO_SUMMARY_AVAILABLE`] when there is none.
    pub fn result_summary(&self) -> &str {
        self.document["log"]["result"]["summary"]
            .as_str()
            .unwrap_or(NO_SUMMARY_AVAILABLE)
    }

    /// Counts and summary for display.
    pub fn summary(&self) -> DarSummary {
        DarSummary {
            path: self.path.clone(),
            render_count: self.renders().len(),
            result_summary: self.result_summary().to_string(),
            entry_count: self.entries().len(),
        }
    }

    /// Strict typed view of the document.
    pub fn to_document(&self) -> DarResult<DarDocument> {
        DarDocument::from_value(self.document.clone())
    }

    /// Write the document to a path.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> DarResult<()> {
        write_json_to_path(&self.document, path)
    }

    fn log_array(&self, key: &str) -> &[Value] {
        self.document["log"][key]
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Human-readable overview of a DAR file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DarSummary {
    pub path: Option<PathBuf>,
    pub render_count: usize,
    pub result_summary: String,
    pub entry_count: usize,
}

impl fmt::Display for DarSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => writeln!(f, "DAR File: {}", path.display())?,
            None => writeln!(f, "DAR File: <memory>")?,
        }
        writeln!(f, "Number of Renders: {}", self.render_count)?;
        writeln!(f, "Result Summary: {}", self.result_summary)?;
        write!(f, "Number of Request Entries: {}", self.entry_count)
    }
}

/// Read and parse a JSON file, logging load failures before returning them.
pub fn read_json(path: &Path) -> DarResult<Value> {
    let bytes = fs::read(path).map_err(|source| {
        tracing::error!(path = %path.display(), "failed to read file: {}", source);
        DarError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|source| {
        tracing::error!(path = %path.display(), "file is not valid JSON: {}", source);
        DarError::Json {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Serialize a value with DAR indentation.
pub fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, writer: W) -> DarResult<()> {
    let formatter = PrettyFormatter::with_indent(OUTPUT_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser).map_err(DarError::Serialize)
}

/// Serialize a value with DAR indentation into a string.
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> DarResult<String> {
    let mut buf = Vec::new();
    write_json(value, &mut buf)?;
    String::from_utf8(buf).map_err(|e| DarError::Serialize(serde::ser::Error::custom(e)))
}

/// Serialize a value with DAR indentation into a file.
pub fn write_json_to_path<T: Serialize + ?Sized, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> DarResult<()> {
    let path = path.as_ref();
    let io_err = |source| DarError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_json(value, &mut writer)?;
    writer.flush().map_err(io_err)?;
    tracing::debug!(path = %path.display(), "wrote DAR document");
    Ok(())
}
