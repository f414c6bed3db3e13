//! Post loader - fetches a post's markdown by slug and renders it

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::registry::is_valid_slug;
use super::{reading_time, FrontMatter, MarkdownConverter, Outline, RenderedPost};
use crate::config::SiteConfig;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("post not found: {slug}")]
    NotFound { slug: String },
    #[error("failed to convert post {slug}: {reason}")]
    Conversion { slug: String, reason: String },
}

impl LoadError {
    pub fn slug(&self) -> &str {
        match self {
            LoadError::NotFound { slug } | LoadError::Conversion { slug, .. } => slug,
        }
    }
}

/// Where raw post text comes from
pub trait ContentSource: Send + Sync {
    /// Raw markdown for `slug`, or [`LoadError::NotFound`]
    fn fetch(&self, slug: &str) -> Result<String, LoadError>;
}

/// Reads `{slug}.md` under a content root
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}.md", slug))
    }
}

impl ContentSource for FsSource {
    fn fetch(&self, slug: &str) -> Result<String, LoadError> {
        let not_found = || LoadError::NotFound {
            slug: slug.to_string(),
        };

        // Slugs come from URLs; never let one escape the content root
        if !is_valid_slug(slug) {
            return Err(not_found());
        }

        let path = self.path_for(slug);
        fs::read_to_string(&path).map_err(|e| {
            tracing::debug!("Cannot read {:?}: {}", path, e);
            not_found()
        })
    }
}

/// In-memory source keyed by slug
impl ContentSource for HashMap<String, String> {
    fn fetch(&self, slug: &str) -> Result<String, LoadError> {
        self.get(slug).cloned().ok_or_else(|| LoadError::NotFound {
            slug: slug.to_string(),
        })
    }
}

/// Loads a single post and produces its rendered form
pub struct PostLoader<S, C> {
    source: S,
    converter: C,
    words_per_minute: usize,
    outline_min_headings: usize,
}

impl<S: ContentSource, C: MarkdownConverter> PostLoader<S, C> {
    /// Create a new post loader
    pub fn new(source: S, converter: C, config: &SiteConfig) -> Self {
        Self {
            source,
            converter,
            words_per_minute: config.words_per_minute,
            outline_min_headings: config.outline_min_headings,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch, parse and convert the post named `slug`. Nothing partial is
    /// returned: any failure yields an error.
    pub fn load(&self, slug: &str) -> Result<RenderedPost, LoadError> {
        let document = self.source.fetch(slug)?;
        let (metadata, body) = FrontMatter::parse(&document);

        let reading_time = reading_time(body, self.words_per_minute);
        let outline = Outline::from_markdown(body, self.outline_min_headings);

        let content = self
            .converter
            .convert(body)
            .map_err(|e| LoadError::Conversion {
                slug: slug.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded post {} ({} min read, outline: {})",
            slug,
            reading_time,
            outline.is_some()
        );

        Ok(RenderedPost {
            slug: slug.to_string(),
            metadata,
            reading_time,
            outline,
            raw: body.to_string(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MarkdownRenderer;
    use anyhow::anyhow;
    use tempfile::TempDir;

    struct BrokenConverter;

    impl MarkdownConverter for BrokenConverter {
        fn convert(&self, _markdown: &str) -> anyhow::Result<String> {
            Err(anyhow!("renderer unavailable"))
        }
    }

    fn source(slug: &str, document: &str) -> HashMap<String, String> {
        HashMap::from([(slug.to_string(), document.to_string())])
    }

    #[test]
    fn test_load_post() {
        let document = r#"---
title: "Cron Jobs"
pubDate: 2024-05-09
description: Privilege escalation
---
Intro paragraph.

## Mechanics

### Writable scripts

## Mitigation
"#;
        let loader = PostLoader::new(
            source("cron", document),
            MarkdownRenderer::new(),
            &SiteConfig::default(),
        );
        let post = loader.load("cron").unwrap();

        assert_eq!(post.title(), "Cron Jobs");
        assert_eq!(post.metadata.pub_date(), Some("2024-05-09"));
        assert_eq!(post.reading_time, 1);
        assert!(post.raw.starts_with("Intro paragraph."));
        assert!(post.content.contains(r#"<h2 id="mechanics">Mechanics</h2>"#));
        assert!(!post.content.contains("pubDate"));

        let outline = post.outline.unwrap();
        assert_eq!(outline.entries().len(), 3);
        assert_eq!(outline.entries()[1].level, 3);
    }

    #[test]
    fn test_outline_links_resolve_to_body_headings() {
        let document = "## Setup {#setup}\n\n## [Docs](https://example.com)\n\n## Plain one\n";
        let loader = PostLoader::new(
            source("links", document),
            MarkdownRenderer::new(),
            &SiteConfig::default(),
        );
        let post = loader.load("links").unwrap();

        let outline = post.outline.unwrap();
        let anchors: Vec<_> = outline.entries().iter().map(|h| h.anchor_id.as_str()).collect();
        assert_eq!(anchors, vec!["setup-setup", "docshttpsexamplecom", "plain-one"]);
        for anchor in anchors {
            assert!(
                post.content.contains(&format!(r#"id="{}""#, anchor)),
                "outline link #{} has no target",
                anchor
            );
        }
    }

    #[test]
    fn test_short_post_has_no_outline() {
        let loader = PostLoader::new(
            source("short", "## One\n\n## Two\n"),
            MarkdownRenderer::new(),
            &SiteConfig::default(),
        );
        assert!(loader.load("short").unwrap().outline.is_none());
    }

    #[test]
    fn test_missing_post() {
        let loader = PostLoader::new(
            HashMap::new(),
            MarkdownRenderer::new(),
            &SiteConfig::default(),
        );
        let err = loader.load("nope").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.slug(), "nope");
    }

    #[test]
    fn test_conversion_failure() {
        let loader = PostLoader::new(source("a", "text"), BrokenConverter, &SiteConfig::default());
        let err = loader.load("a").unwrap_err();
        assert!(matches!(err, LoadError::Conversion { .. }));
        assert!(err.to_string().contains("renderer unavailable"));
    }

    #[test]
    fn test_fs_source() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("hello.md"), "Hello there").unwrap();
        let source = FsSource::new(dir.path());

        assert_eq!(source.fetch("hello").unwrap(), "Hello there");
        assert!(matches!(source.fetch("missing"), Err(LoadError::NotFound { .. })));
        assert!(matches!(source.fetch("../hello"), Err(LoadError::NotFound { .. })));
    }
}
