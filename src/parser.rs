//! Notebook document parser.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Notebook, NBFORMAT_MAJOR, NBFORMAT_MINOR_KNOWN};

/// Notebook document parser.
pub struct NotebookParser {
    data: String,
}

impl NotebookParser {
    /// Open a notebook file.
    ///
    /// The file handle is released as soon as its contents are read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a notebook from a JSON string.
    pub fn from_json(data: &str) -> Self {
        Self {
            data: data.to_string(),
        }
    }

    /// Parse a notebook from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Ok(Self { data })
    }

    /// Parse the document and return a structured Notebook.
    pub fn parse(&self) -> Result<Notebook> {
        let notebook: Notebook = serde_json::from_str(&self.data)?;

        if notebook.nbformat != NBFORMAT_MAJOR {
            return Err(Error::UnsupportedVersion(notebook.nbformat));
        }
        if notebook.nbformat_minor > NBFORMAT_MINOR_KNOWN {
            log::warn!(
                "nbformat {}.{} is newer than this tool knows; unknown fields pass through",
                notebook.nbformat,
                notebook.nbformat_minor
            );
        }

        log::debug!("parsed notebook with {} cells", notebook.cell_count());
        Ok(notebook)
    }
}
