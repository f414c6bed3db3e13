//! Rendered post model

use super::{FrontMatter, Outline};

/// Title shown in the page heading when the post declares none
pub const UNTITLED: &str = "Untitled";

/// Title used for the document and social metadata when the post declares none
pub const DEFAULT_TITLE: &str = "Blog Post";

/// A post loaded from its markdown source and converted to HTML
#[derive(Debug, Clone)]
pub struct RenderedPost {
    /// Slug the post was requested by
    pub slug: String,

    /// Front-matter fields
    pub metadata: FrontMatter,

    /// Estimated minutes to read
    pub reading_time: usize,

    /// Heading outline, present only for posts with enough headings
    pub outline: Option<Outline>,

    /// Markdown body with the front-matter removed
    pub raw: String,

    /// Converted body HTML
    pub content: String,
}

impl RenderedPost {
    /// Heading title
    pub fn title(&self) -> &str {
        self.metadata.title().unwrap_or(UNTITLED)
    }

    /// Title for the document, meta tags and share links
    pub fn display_title(&self) -> &str {
        self.metadata.title().unwrap_or(DEFAULT_TITLE)
    }

    pub fn description(&self) -> &str {
        self.metadata.description().unwrap_or("")
    }
}

/// Minutes needed to read `content` at `words_per_minute`, rounded up.
/// Empty content takes no time; any other content at least a minute.
pub fn reading_time(content: &str, words_per_minute: usize) -> usize {
    let words = content.split_whitespace().count();
    if words == 0 || words_per_minute == 0 {
        return 0;
    }
    words.div_ceil(words_per_minute)
}
