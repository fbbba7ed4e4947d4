//! Error types for the nbmeta library.

use std::io;
use thiserror::Error;

/// Result type alias for nbmeta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rewriting notebook metadata.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid notebook JSON.
    #[error("Notebook parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The notebook major format version is not supported.
    #[error("Unsupported nbformat version {0} (expected 4)")]
    UnsupportedVersion(u64),

    /// No level-1 heading exists to use as the chapter title.
    #[error("No chapter title found: no markdown line matches `# ...`")]
    MissingTitle,

    /// A metadata value had an unexpected JSON type.
    #[error("Metadata key `{0}` is not an object")]
    MetadataType(&'static str),

    /// A solution block opened on the very first cell.
    #[error("Solution block starts on the first cell; no preceding cell to mark")]
    SolutionAtStart,

    /// Error during serialization.
    #[error("Serialization error: {0}")]
    Serialize(String),
}
