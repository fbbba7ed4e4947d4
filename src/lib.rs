//! # nbmeta
//!
//! Publication metadata rewriting for Jupyter notebooks.
//!
//! This library loads an nbformat 4 notebook, strips editor-specific UI
//! state, injects bibliography and table-of-contents configuration,
//! optionally synthesizes a title page from the first chapter heading, and
//! tags solution blocks for selective hiding in published output. Cell
//! sources and any metadata the passes do not touch round-trip unchanged.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nbmeta::{rewrite_file, RewriteOptions};
//!
//! fn main() -> nbmeta::Result<()> {
//!     let options = RewriteOptions::new().with_titlepage(true);
//!     let output = rewrite_file("Fuzzer.ipynb", &options)?;
//!     print!("{}", output);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Bibliography defaulting**: first write wins, never overwritten
//! - **Fixed table of contents**: always replaces any prior configuration
//! - **Title pages**: author, first `# ` heading, and subtitle
//! - **Solution hiding**: `**Solution` blocks tagged down to the next heading
//! - **Round-trip fidelity**: unknown fields and key order preserved

pub mod error;
pub mod model;
pub mod parser;
pub mod serialize;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Cell, Notebook, Source};
pub use parser::NotebookParser;
pub use serialize::{to_json, JsonFormat};
pub use transform::{
    extract_title, markdown_text, merge_document_metadata, tag_solution_cells, RewriteOptions,
};

use std::io::Read;
use std::path::Path;

/// Parse a notebook file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use nbmeta::parse_file;
///
/// let notebook = parse_file("Fuzzer.ipynb").unwrap();
/// println!("Cells: {}", notebook.cell_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    NotebookParser::open(path)?.parse()
}

/// Parse a notebook from a JSON string.
pub fn parse_str(data: &str) -> Result<Notebook> {
    NotebookParser::from_json(data).parse()
}

/// Parse a notebook from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Notebook> {
    NotebookParser::from_reader(reader)?.parse()
}

/// Apply the metadata rewrite passes to a parsed notebook in place:
/// the document-level merge, then solution-block tagging.
pub fn rewrite(notebook: &mut Notebook, options: &RewriteOptions) -> Result<()> {
    merge_document_metadata(notebook, options)?;
    tag_solution_cells(notebook)
}

/// Rewrite a notebook file and return the text to emit for it: the
/// serialized document followed by one newline, as JupyterLab writes it.
pub fn rewrite_file<P: AsRef<Path>>(path: P, options: &RewriteOptions) -> Result<String> {
    let mut notebook = parse_file(path)?;
    rewrite(&mut notebook, options)?;
    let mut output = serialize::to_json(&notebook, JsonFormat::Pretty)?;
    output.push('\n');
    Ok(output)
}
