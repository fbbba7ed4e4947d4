//! Solution-block tagging.

use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::model::Notebook;

/// Traversal state for the tagging fold.
#[derive(Debug, Default)]
struct TagState {
    /// Currently inside a solution block
    within_solution: bool,

    /// Index of the previously processed cell
    previous: Option<usize>,
}

/// Tag solution blocks for hiding in published output.
///
/// A markdown cell whose raw source starts with `**Solution` opens a block
/// and marks the cell just before it as the boundary (`solution2_first`);
/// a markdown heading closes the block before the heading itself is
/// processed, so the heading cell stays visible. Every cell inside the
/// block, whatever its type, is hidden and skipped in slideshows — the
/// opening cell included.
///
/// A solution block on the very first cell has no boundary cell to mark
/// and fails with [`Error::SolutionAtStart`].
pub fn tag_solution_cells(notebook: &mut Notebook) -> Result<()> {
    let mut state = TagState::default();

    for index in 0..notebook.cells.len() {
        let cell = &notebook.cells[index];
        let (opens, closes) = if cell.is_markdown() {
            (
                cell.source.starts_with("**Solution"),
                cell.source.starts_with("#"),
            )
        } else {
            (false, false)
        };

        if opens {
            state.within_solution = true;
            let boundary = state.previous.ok_or(Error::SolutionAtStart)?;
            let metadata = &mut notebook.cells[boundary].metadata;
            metadata.insert("solution2_first".to_string(), Value::Bool(true));
            metadata.insert("solution2".to_string(), Value::String("hidden".to_string()));
        } else if closes {
            state.within_solution = false;
        }

        if state.within_solution {
            let metadata = &mut notebook.cells[index].metadata;
            metadata.insert("solution2".to_string(), Value::String("hidden".to_string()));
            // An existing slideshow entry is left entirely untouched
            if !metadata.contains_key("slideshow") {
                metadata.insert("slideshow".to_string(), json!({"slide_type": "skip"}));
            }
        }

        state.previous = Some(index);
    }

    Ok(())
}
