//! Cell-level types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single cell in a notebook.
///
/// `cell_type` and `source` are typed because the rewrite passes inspect
/// them; all remaining fields (`outputs`, `execution_count`, `attachments`,
/// `id`, ...) ride along in `extra` and are re-serialized unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Cell type tag: `"markdown"`, `"code"`, or any other tag passed through
    pub cell_type: String,

    /// Cell-level metadata
    #[serde(default)]
    pub metadata: Map<String, Value>,

    /// Cell source text
    #[serde(default)]
    pub source: Source,

    /// Remaining per-cell fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    /// Create a markdown cell with the given source text.
    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            cell_type: "markdown".to_string(),
            metadata: Map::new(),
            source: Source::Text(source.into()),
            extra: Map::new(),
        }
    }

    /// Create a code cell with the given source text.
    pub fn code(source: impl Into<String>) -> Self {
        Self {
            cell_type: "code".to_string(),
            metadata: Map::new(),
            source: Source::Text(source.into()),
            extra: Map::new(),
        }
    }

    /// Whether this is a markdown cell.
    pub fn is_markdown(&self) -> bool {
        self.cell_type == "markdown"
    }

    /// Whether this is a code cell.
    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }
}

/// Cell source text as stored in nbformat 4: either a single string or a
/// list of line strings. Round-trips in whichever representation it was
/// read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// A single string
    Text(String),
    /// A list of line strings
    Lines(Vec<String>),
}

impl Source {
    /// The joined source text.
    pub fn text(&self) -> String {
        match self {
            Source::Text(s) => s.clone(),
            Source::Lines(lines) => lines.concat(),
        }
    }

    /// Whether the raw source text starts with `prefix`. No trimming: a
    /// cell starting with whitespace before the prefix does not match.
    pub fn starts_with(&self, prefix: &str) -> bool {
        match self {
            Source::Text(s) => s.starts_with(prefix),
            Source::Lines(lines) => {
                // The prefix may span line boundaries
                let mut rest = prefix;
                for line in lines {
                    if rest.len() <= line.len() {
                        return line.starts_with(rest);
                    }
                    match rest.strip_prefix(line.as_str()) {
                        Some(remaining) => rest = remaining,
                        None => return false,
                    }
                }
                rest.is_empty()
            }
        }
    }

    /// Whether the source text is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Source::Text(s) => s.is_empty(),
            Source::Lines(lines) => lines.iter().all(|line| line.is_empty()),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_constructors() {
        let cell = Cell::markdown("# Title");
        assert!(cell.is_markdown());
        assert!(!cell.is_code());
        assert_eq!(cell.source.text(), "# Title");

        let cell = Cell::code("print(1)");
        assert!(cell.is_code());
    }

    #[test]
    fn test_source_text_joins_lines() {
        let source = Source::Lines(vec!["# Title\n".to_string(), "body".to_string()]);
        assert_eq!(source.text(), "# Title\nbody");
    }

    #[test]
    fn test_source_starts_with_text() {
        let source = Source::Text("**Solution** here".to_string());
        assert!(source.starts_with("**Solution"));
        assert!(!source.starts_with("#"));

        // Leading whitespace does not match
        let source = Source::Text("  # indented".to_string());
        assert!(!source.starts_with("#"));
    }

    #[test]
    fn test_source_starts_with_lines() {
        let source = Source::Lines(vec!["**Solution**\n".to_string(), "text".to_string()]);
        assert!(source.starts_with("**Solution"));

        // Prefix spanning a line boundary
        let source = Source::Lines(vec!["**".to_string(), "Solution".to_string()]);
        assert!(source.starts_with("**Solution"));

        let source = Source::Lines(vec![]);
        assert!(source.starts_with(""));
        assert!(!source.starts_with("#"));
    }

    #[test]
    fn test_source_representation_round_trip() {
        let as_lines: Source =
            serde_json::from_str(r##"["# Title\n", "body"]"##).unwrap();
        assert!(matches!(as_lines, Source::Lines(_)));
        assert_eq!(
            serde_json::to_string(&as_lines).unwrap(),
            r##"["# Title\n","body"]"##
        );

        let as_text: Source = serde_json::from_str(r##""# Title""##).unwrap();
        assert!(matches!(as_text, Source::Text(_)));
        assert_eq!(serde_json::to_string(&as_text).unwrap(), r##""# Title""##);
    }

    #[test]
    fn test_cell_extra_fields_pass_through() {
        let json = r#"{
            "cell_type": "code",
            "execution_count": 7,
            "metadata": {},
            "outputs": [{"name": "stdout", "output_type": "stream", "text": "hi"}],
            "source": "print('hi')"
        }"#;
        let cell: Cell = serde_json::from_str(json).unwrap();
        assert!(cell.is_code());
        assert_eq!(cell.extra["execution_count"], 7);
        assert!(cell.extra["outputs"].is_array());

        let round_trip = serde_json::to_value(&cell).unwrap();
        assert_eq!(round_trip["execution_count"], 7);
        assert_eq!(round_trip["outputs"][0]["name"], "stdout");
    }
}
