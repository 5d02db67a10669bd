//! FHIR JSON loading and canonical formatting.
//! Formatting is purely cosmetic and follows these rules:
//! - Top-level keys listed in [`CANONICAL_KEY_ORDER`] come first, in that order.
//! - All remaining keys follow in their original relative order.
//! - Values (including nested objects) are never altered, added or dropped.
//! - Output is indented JSON with a configurable indent width.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Presentation order for well-known top-level resource keys.
pub const CANONICAL_KEY_ORDER: &[&str] = &[
    "resourceType",
    "id",
    "meta",
    "identifier",
    "active",
    "name",
    "status",
    "code",
    "subject",
    "entry",
];

const DEFAULT_INDENT: usize = 2;

/// Widest indentation [`format_resource`] accepts.
pub const MAX_INDENT: usize = 16;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("indent of {indent} exceeds the maximum of {MAX_INDENT}")]
    IndentTooLarge { indent: usize },
}

/// Options for [`format_resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Number of spaces per indentation level.
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl FormatOptions {
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }
}

/// Parse a FHIR JSON payload into an untyped document tree.
pub fn parse_resource(input: &str) -> Result<Value, FormatError> {
    Ok(serde_json::from_str(input)?)
}

/// Read and parse a FHIR JSON document from disk.
pub fn load_resource(path: impl AsRef<Path>) -> Result<Value, FormatError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| FormatError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded resource file");
    parse_resource(&content)
}

/// Reorder the top-level keys of `resource` into canonical presentation order.
///
/// Non-object documents are returned unchanged.
pub fn canonical_order(resource: &Value) -> Value {
    let Value::Object(obj) = resource else {
        return resource.clone();
    };

    let mut ordered = Map::with_capacity(obj.len());
    for key in CANONICAL_KEY_ORDER {
        if let Some(value) = obj.get(*key) {
            ordered.insert((*key).to_string(), value.clone());
        }
    }

    for (key, value) in obj {
        if !ordered.contains_key(key) {
            ordered.insert(key.clone(), value.clone());
        }
    }

    Value::Object(ordered)
}

/// Reorder `resource` canonically and serialize it as indented JSON.
///
/// Fails with [`FormatError::IndentTooLarge`] when `options.indent` exceeds
/// [`MAX_INDENT`].
pub fn format_resource(resource: &Value, options: &FormatOptions) -> Result<String, FormatError> {
    if options.indent > MAX_INDENT {
        return Err(FormatError::IndentTooLarge {
            indent: options.indent,
        });
    }

    let ordered = canonical_order(resource);
    let indent = " ".repeat(options.indent);

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    ordered.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

/// Format `resource` and write it to `path`, followed by a trailing newline.
pub fn write_resource(
    path: impl AsRef<Path>,
    resource: &Value,
    options: &FormatOptions,
) -> Result<(), FormatError> {
    let path = path.as_ref();
    let mut text = format_resource(resource, options)?;
    text.push('\n');
    fs::write(path, text).map_err(|source| FormatError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote formatted resource");
    Ok(())
}
