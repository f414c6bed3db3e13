//! Front-matter parsing
//!
//! Posts may start with a block of `key: value` lines fenced by `---`
//! lines. Values are plain strings; there is no schema.

use indexmap::IndexMap;

const DELIMITER: &str = "---";

/// Key/value metadata from the head of a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Split a document into its front-matter and the remaining content.
    ///
    /// When the document does not open with a fenced block the metadata is
    /// empty and the content is the whole input, untouched. Otherwise the
    /// block is removed and the remaining content is trimmed.
    pub fn parse(document: &str) -> (Self, &str) {
        match split_block(document) {
            Some((block, rest)) => (Self::parse_block(block), rest.trim()),
            None => (FrontMatter::default(), document),
        }
    }

    /// Parse `key: value` lines. A line is split on its first colon, lines
    /// without one are skipped and a repeated key overwrites the earlier value.
    fn parse_block(block: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), unquote(value.trim()).to_string());
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn pub_date(&self) -> Option<&str> {
        self.get("pubDate")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Locate the fenced block at the very start of the document.
/// Returns (block body, content after the closing fence).
fn split_block(document: &str) -> Option<(&str, &str)> {
    let rest = document
        .strip_prefix("---\n")
        .or_else(|| document.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let bare = line.trim_end_matches('\n').trim_end_matches('\r');
        if bare == DELIMITER {
            let block = rest[..offset].trim_end_matches('\n').trim_end_matches('\r');
            return Some((block, &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Strip one layer of surrounding double quotes
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
