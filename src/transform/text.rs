//! Markdown text extraction.

use crate::model::Notebook;

/// Concatenate the source text of every markdown cell, each followed by a
/// blank line, in cell order. Non-markdown cells contribute nothing.
pub fn markdown_text(notebook: &Notebook) -> String {
    let mut contents = String::new();
    for cell in notebook.markdown_cells() {
        contents.push_str(&cell.source.text());
        contents.push_str("\n\n");
    }
    contents
}
