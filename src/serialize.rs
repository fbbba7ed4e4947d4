//! JSON serialization for notebooks.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::model::Notebook;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed with the one-space indent nbformat uses
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a notebook to JSON.
///
/// The returned string has no trailing newline; emitters append exactly one
/// per document.
pub fn to_json(notebook: &Notebook, format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Pretty => {
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(b" ");
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            notebook
                .serialize(&mut ser)
                .map_err(|e| Error::Serialize(e.to_string()))?;
            String::from_utf8(buf).map_err(|e| Error::Serialize(e.to_string()))
        }
        JsonFormat::Compact => {
            serde_json::to_string(notebook).map_err(|e| Error::Serialize(e.to_string()))
        }
    }
}
