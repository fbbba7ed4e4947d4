//! Chapter title extraction.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::Notebook;

use super::text::markdown_text;

/// Extract the chapter title: the first line matching `# ...` anywhere in
/// the combined markdown text.
///
/// Literal `\n` escape sequences are artifacts of stored escaped text, not
/// line breaks, and are stripped from the result. Fails with
/// [`Error::MissingTitle`] when no level-1 heading exists.
pub fn extract_title(notebook: &Notebook) -> Result<String> {
    let contents = markdown_text(notebook);
    let heading = Regex::new(r"(?m)^# (.*)").unwrap();
    let captures = heading.captures(&contents).ok_or(Error::MissingTitle)?;
    Ok(captures[1].replace("\\n", ""))
}
