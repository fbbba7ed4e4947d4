//! Document-level metadata merge.

use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::model::Notebook;

use super::options::RewriteOptions;
use super::title::extract_title;

/// Merge publication metadata into the notebook's document-level mapping.
///
/// Removes editor UI state (`celltoolbar`), defaults the bibliography
/// (first write wins), optionally synthesizes the `ipub.titlepage` record
/// from the first chapter heading, and unconditionally replaces `toc` with
/// the fixed table-of-contents configuration. Idempotent: running it twice
/// leaves the same result as running it once.
pub fn merge_document_metadata(
    notebook: &mut Notebook,
    options: &RewriteOptions,
) -> Result<()> {
    // Cell toolbar is editor UI state, irrelevant to published output.
    // shift_remove keeps the order of the remaining keys; plain remove
    // swap-removes under preserve_order.
    notebook.metadata.shift_remove("celltoolbar");

    // Title extraction reads the cells, so it runs before the metadata
    // map is mutably borrowed
    let title = if options.titlepage {
        Some(extract_title(notebook)?)
    } else {
        None
    };

    let ipub = notebook
        .metadata
        .entry("ipub")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or(Error::MetadataType("ipub"))?;

    // First write wins for the bibliography
    ipub.entry("bibliography")
        .or_insert_with(|| Value::String(options.bibliography.clone()));

    // The title page is always regenerated, even if one exists
    if let Some(title) = title {
        ipub.insert(
            "titlepage".to_string(),
            json!({
                "author": options.author,
                "title": title,
                "subtitle": options.subtitle
            }),
        );
    }

    notebook.metadata.insert("toc".to_string(), toc_record());

    log::debug!(
        "document metadata merged (titlepage: {})",
        options.titlepage
    );
    Ok(())
}

/// The fixed table-of-contents configuration. Always replaces any prior
/// value.
fn toc_record() -> Value {
    json!({
        "base_numbering": 1,
        "nav_menu": {},
        "number_sections": true,
        "sideBar": true,
        "skip_h1_title": true,
        "title_cell": "",
        "title_sidebar": "Contents",
        "toc_cell": false,
        "toc_position": {},
        "toc_section_display": true,
        "toc_window_display": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cell;

    fn chapter_notebook() -> Notebook {
        let mut notebook = Notebook::new();
        notebook.add_cell(Cell::markdown("# Fuzzing: Breaking Things"));
        notebook.add_cell(Cell::code("fuzzer()"));
        notebook
    }

    #[test]
    fn test_celltoolbar_removed() {
        let mut notebook = chapter_notebook();
        notebook
            .metadata
            .insert("celltoolbar".to_string(), json!("Slideshow"));

        merge_document_metadata(&mut notebook, &RewriteOptions::default()).unwrap();
        assert!(!notebook.metadata.contains_key("celltoolbar"));
    }

    #[test]
    fn test_bibliography_default_is_first_write_wins() {
        let mut notebook = chapter_notebook();
        merge_document_metadata(&mut notebook, &RewriteOptions::default()).unwrap();
        assert_eq!(
            notebook.metadata["ipub"]["bibliography"],
            json!("fuzzingbook.bib")
        );

        // A pre-existing value survives the merge
        let mut notebook = chapter_notebook();
        notebook
            .metadata
            .insert("ipub".to_string(), json!({"bibliography": "custom.bib"}));
        merge_document_metadata(&mut notebook, &RewriteOptions::default()).unwrap();
        assert_eq!(
            notebook.metadata["ipub"]["bibliography"],
            json!("custom.bib")
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut notebook = chapter_notebook();
        let options = RewriteOptions::default();

        merge_document_metadata(&mut notebook, &options).unwrap();
        let once = notebook.metadata.clone();
        merge_document_metadata(&mut notebook, &options).unwrap();
        assert_eq!(notebook.metadata, once);
    }

    #[test]
    fn test_toc_overwrite_is_unconditional() {
        let mut notebook = chapter_notebook();
        notebook
            .metadata
            .insert("toc".to_string(), json!({"stale": true}));

        merge_document_metadata(&mut notebook, &RewriteOptions::default()).unwrap();

        let toc = &notebook.metadata["toc"];
        assert_eq!(toc, &toc_record());
        assert_eq!(toc["base_numbering"], json!(1));
        assert_eq!(toc["title_sidebar"], json!("Contents"));
        assert_eq!(toc["toc_cell"], json!(false));
        assert!(toc.get("stale").is_none());
    }

    #[test]
    fn test_titlepage_record() {
        let mut notebook = chapter_notebook();
        let options = RewriteOptions::new().with_titlepage(true);

        merge_document_metadata(&mut notebook, &options).unwrap();

        let titlepage = &notebook.metadata["ipub"]["titlepage"];
        assert_eq!(titlepage["title"], json!("Fuzzing: Breaking Things"));
        assert_eq!(
            titlepage["subtitle"],
            json!("A Chapter of \"Generating Software Tests\"")
        );
        assert!(titlepage["author"]
            .as_str()
            .unwrap()
            .starts_with("Andreas Zeller"));
    }

    #[test]
    fn test_titlepage_overwrites_existing() {
        let mut notebook = chapter_notebook();
        notebook.metadata.insert(
            "ipub".to_string(),
            json!({"titlepage": {"title": "Old Title"}}),
        );

        let options = RewriteOptions::new().with_titlepage(true);
        merge_document_metadata(&mut notebook, &options).unwrap();
        assert_eq!(
            notebook.metadata["ipub"]["titlepage"]["title"],
            json!("Fuzzing: Breaking Things")
        );
    }

    #[test]
    fn test_titlepage_without_heading_fails() {
        let mut notebook = Notebook::new();
        notebook.add_cell(Cell::markdown("no heading here"));

        let options = RewriteOptions::new().with_titlepage(true);
        let result = merge_document_metadata(&mut notebook, &options);
        assert!(matches!(result, Err(Error::MissingTitle)));
    }

    #[test]
    fn test_no_titlepage_without_flag() {
        let mut notebook = chapter_notebook();
        merge_document_metadata(&mut notebook, &RewriteOptions::default()).unwrap();
        assert!(notebook.metadata["ipub"].get("titlepage").is_none());
    }

    #[test]
    fn test_non_object_ipub_is_an_error() {
        let mut notebook = chapter_notebook();
        notebook
            .metadata
            .insert("ipub".to_string(), json!("not an object"));

        let result = merge_document_metadata(&mut notebook, &RewriteOptions::default());
        assert!(matches!(result, Err(Error::MetadataType("ipub"))));
    }
}
