//! Heading outline (table of contents) extracted from markdown source

use lazy_static::lazy_static;
use regex::Regex;

use crate::helpers::html_escape;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"^(#{2,3})\s+(.+)").unwrap();
}

/// A level 2 or 3 heading found in a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    pub level: u8,
    pub text: String,
    pub anchor_id: String,
}

impl HeadingEntry {
    pub fn new(level: u8, text: &str) -> Self {
        Self {
            level,
            text: text.to_string(),
            anchor_id: anchor_id(text),
        }
    }
}

/// Ordered headings of a post, only built for posts with enough of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<HeadingEntry>,
}

impl Outline {
    /// Build an outline when at least `min_headings` headings are present
    pub fn from_markdown(markdown: &str, min_headings: usize) -> Option<Self> {
        let entries = extract_headings(markdown);
        if entries.is_empty() || entries.len() < min_headings {
            return None;
        }
        Some(Self { entries })
    }

    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    /// Render as a collapsible list of in-page links
    pub fn to_html(&self) -> String {
        let items: String = self
            .entries
            .iter()
            .map(|h| {
                format!(
                    r##"<li class="toc-level-{}"><a href="#{}">{}</a></li>"##,
                    h.level,
                    h.anchor_id,
                    html_escape(&h.text)
                )
            })
            .collect();

        format!(
            r#"<details class="toc-wrapper" open><summary>Table of Contents</summary><ul class="toc-list">{}</ul></details>"#,
            items
        )
    }
}

/// Scan markdown line by line for `##` and `###` headings, in document order
pub fn extract_headings(markdown: &str) -> Vec<HeadingEntry> {
    markdown.lines().filter_map(parse_heading_line).collect()
}

/// The outline entry for a single source line, if it is a `##` or `###`
/// heading
pub fn parse_heading_line(line: &str) -> Option<HeadingEntry> {
    let caps = HEADING_REGEX.captures(line)?;
    let level = caps.get(1)?.as_str().len() as u8;
    let text = caps.get(2)?.as_str();
    Some(HeadingEntry::new(level, text))
}

/// Derive an anchor from heading text: lowercase, drop everything that is
/// not a word character, whitespace or hyphen, then turn each whitespace run
/// into a single hyphen.
pub fn anchor_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
                in_space = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            id.push(c);
            in_space = false;
        }
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("Hello, World!"), "hello-world");
        assert_eq!(anchor_id("Step 1: Recon & Mapping"), "step-1-recon-mapping");
        assert_eq!(anchor_id("snake_case and-hyphen"), "snake_case-and-hyphen");
        assert_eq!(anchor_id("Trailing space "), "trailing-space-");
        assert_eq!(anchor_id("Café"), "caf");
    }

    #[test]
    fn test_extract_headings() {
        let md = "# Title\n## First\ntext\n### Second, part\n#### Too deep\n##NoSpace\n## Third";
        let headings = extract_headings(md);
        assert_eq!(
            headings,
            vec![
                HeadingEntry::new(2, "First"),
                HeadingEntry::new(3, "Second, part"),
                HeadingEntry::new(2, "Third"),
            ]
        );
        assert_eq!(headings[1].anchor_id, "second-part");
    }

    #[test]
    fn test_two_headings_no_outline() {
        let md = "## One\n\n## Two\n";
        assert!(Outline::from_markdown(md, 3).is_none());
    }

    #[test]
    fn test_three_headings_outline() {
        let md = "## Hello, World!\n\nbody\n\n### Details\n\n## Wrap up\n";
        let outline = Outline::from_markdown(md, 3).unwrap();
        let ids: Vec<_> = outline.entries().iter().map(|h| h.anchor_id.as_str()).collect();
        assert_eq!(ids, vec!["hello-world", "details", "wrap-up"]);

        let html = outline.to_html();
        assert!(html.contains(r##"<li class="toc-level-2"><a href="#hello-world">Hello, World!</a></li>"##));
        assert!(html.contains(r#"<li class="toc-level-3">"#));
        assert!(html.starts_with(r#"<details class="toc-wrapper" open>"#));
    }

    #[test]
    fn test_outline_text_is_escaped() {
        let md = "## <script>\n## b\n## c\n";
        let html = Outline::from_markdown(md, 3).unwrap().to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
