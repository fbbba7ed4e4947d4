//! Metadata rewrite passes.
//!
//! The rewrite runs over a parsed [`Notebook`](crate::model::Notebook) in
//! two mutating passes: the document-level merge
//! ([`merge_document_metadata`]) and the solution-block tagging pass
//! ([`tag_solution_cells`]). Title extraction and markdown text extraction
//! are read-only helpers the merge builds on.

mod document;
mod options;
mod solution;
mod text;
mod title;

pub use document::merge_document_metadata;
pub use options::{RewriteOptions, DEFAULT_AUTHOR, DEFAULT_BIBLIOGRAPHY, DEFAULT_SUBTITLE};
pub use solution::tag_solution_cells;
pub use text::markdown_text;
pub use title::extract_title;
