//! Notebook-level types.

use super::Cell;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The nbformat major version this library reads and writes.
pub const NBFORMAT_MAJOR: u64 = 4;

/// The newest nbformat minor version this library knows about.
pub const NBFORMAT_MINOR_KNOWN: u64 = 5;

/// A parsed notebook document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    /// Cells in document order
    pub cells: Vec<Cell>,

    /// Document-level metadata
    #[serde(default)]
    pub metadata: Map<String, Value>,

    /// nbformat major version
    pub nbformat: u64,

    /// nbformat minor version
    pub nbformat_minor: u64,

    /// Unknown top-level fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Notebook {
    /// Create a new empty notebook at the current format version.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: Map::new(),
            nbformat: NBFORMAT_MAJOR,
            nbformat_minor: NBFORMAT_MINOR_KNOWN,
            extra: Map::new(),
        }
    }

    /// Get the number of cells in the notebook.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Add a cell to the notebook.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Check if the notebook has any cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the markdown cells in document order.
    pub fn markdown_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_markdown())
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}
