//! Post registry - the fixed list of post summaries that drives the listing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Listing entry for a single post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// URL-safe identifier, also names the backing `{slug}.md`
    pub slug: String,
    pub title: String,
    /// Publication date (ISO `YYYY-MM-DD`)
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid slug {0:?}: only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidSlug(String),
    #[error("duplicate slug {0:?}")]
    DuplicateSlug(String),
}

/// Immutable registry built once at startup
#[derive(Debug, Clone, Default)]
pub struct PostRegistry {
    posts: Vec<PostSummary>,
}

impl PostRegistry {
    /// Build a registry, rejecting unsafe or duplicated slugs
    pub fn new(posts: Vec<PostSummary>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !is_valid_slug(&post.slug) {
                return Err(RegistryError::InvalidSlug(post.slug.clone()));
            }
            if !seen.insert(post.slug.as_str()) {
                return Err(RegistryError::DuplicateSlug(post.slug.clone()));
            }
        }
        Ok(Self { posts })
    }

    /// Entries in authoring order
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&PostSummary> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Entries newest first. The sort is stable, so equal dates keep
    /// their authoring order.
    pub fn sorted_by_date(&self) -> Vec<&PostSummary> {
        let mut sorted: Vec<_> = self.posts.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

/// A slug is usable both as a URL segment and as a file stem
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
pub(crate) fn summary(slug: &str, date: &str) -> PostSummary {
    PostSummary {
        slug: slug.to_string(),
        title: format!("Title of {}", slug),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: format!("About {}", slug),
        tags: vec!["rust".to_string()],
    }
}
