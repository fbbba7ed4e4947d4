//! Rewrite options and configuration.

/// Author line used when none is configured.
pub const DEFAULT_AUTHOR: &str =
    "Andreas Zeller, Rahul Gopinath, Marcel Böhme, Gordon Fraser, and Christian Holler";

/// Subtitle used when none is configured.
pub const DEFAULT_SUBTITLE: &str = "A Chapter of \"Generating Software Tests\"";

/// Bibliography file applied when the notebook has none.
pub const DEFAULT_BIBLIOGRAPHY: &str = "fuzzingbook.bib";

/// Options for the metadata rewrite passes.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Generate an `ipub.titlepage` record from the first chapter heading
    pub titlepage: bool,

    /// Author line for the title page
    pub author: String,

    /// Subtitle for the title page
    pub subtitle: String,

    /// Bibliography file, applied only when the notebook has none
    pub bibliography: String,
}

impl RewriteOptions {
    /// Create new rewrite options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable title page generation.
    pub fn with_titlepage(mut self, titlepage: bool) -> Self {
        self.titlepage = titlepage;
        self
    }

    /// Set the title page author line.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the title page subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the default bibliography file.
    pub fn with_bibliography(mut self, bibliography: impl Into<String>) -> Self {
        self.bibliography = bibliography.into();
        self
    }
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            titlepage: false,
            author: DEFAULT_AUTHOR.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            bibliography: DEFAULT_BIBLIOGRAPHY.to_string(),
        }
    }
}
