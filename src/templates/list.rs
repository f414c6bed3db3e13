//! Post listing markup

use crate::config::SiteConfig;
use crate::content::{PostRegistry, PostSummary};
use crate::helpers::{archive_path, html_escape, more_path, post_path, time_tag, url_for};

pub const NO_POSTS_MESSAGE: &str = "No blog posts yet. Check back soon!";

/// How a listing is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Show at most this many entries; `None` or `0` shows all.
    /// In append mode, the number of entries already on the page.
    pub limit: Option<usize>,
    /// Produce the entries that replace the affordance of a listing
    /// already cut to `limit`, instead of a fresh listing
    pub append: bool,
}

impl ListOptions {
    pub fn limited(limit: Option<usize>) -> Self {
        Self {
            limit,
            append: false,
        }
    }

    /// Append payload for a listing showing its first `shown` entries
    pub fn after(shown: usize) -> Self {
        Self {
            limit: Some(shown),
            append: true,
        }
    }
}

/// Entries selected for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub entries: Vec<&'a PostSummary>,
    /// The registry holds entries past the limit
    pub has_more: bool,
}

impl<'a> ListView<'a> {
    /// Newest first, cut to `limit` when it is smaller than the registry
    pub fn new(registry: &'a PostRegistry, limit: Option<usize>) -> Self {
        let mut entries = registry.sorted_by_date();
        let has_more = match limit.filter(|&limit| limit > 0) {
            Some(limit) if limit < entries.len() => {
                entries.truncate(limit);
                true
            }
            _ => false,
        };
        Self { entries, has_more }
    }
}

/// Renders the post registry as listing markup
#[derive(Debug, Clone)]
pub struct ListRenderer {
    date_format: String,
    archive_url: String,
    more_url: String,
    root: String,
}

impl ListRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            date_format: config.date_format.clone(),
            archive_url: url_for(config, archive_path()),
            more_url: url_for(config, more_path()),
            root: config.root.clone(),
        }
    }

    fn post_url(&self, slug: &str) -> String {
        format!("{}/{}", self.root.trim_end_matches('/'), post_path(slug))
    }

    /// Markup for one listing entry
    pub fn entry(&self, post: &PostSummary) -> String {
        let tags = if post.tags.is_empty() {
            String::new()
        } else {
            let spans: String = post
                .tags
                .iter()
                .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
                .collect();
            format!(r#"<div class="blog-tags">{}</div>"#, spans)
        };

        format!(
            r#"<article class="blog-post" data-slug="{slug}" role="article"><a class="blog-post-link" href="{href}"><div class="blog-date">{date}</div><div class="blog-content"><h3>{title}</h3><p>{description}</p>{tags}</div></a></article>"#,
            slug = html_escape(&post.slug),
            href = html_escape(&self.post_url(&post.slug)),
            date = time_tag(&post.date, &self.date_format),
            title = html_escape(&post.title),
            description = html_escape(&post.description),
            tags = tags,
        )
    }

    pub fn entries(&self, posts: &[&PostSummary]) -> String {
        posts.iter().map(|p| self.entry(p)).collect()
    }

    /// The "Show More" affordance. It links to the full archive and tells
    /// the client script where the remaining entries are.
    pub fn show_more(&self) -> String {
        format!(
            r#"<div class="show-more-container"><a class="show-more-btn" href="{}" data-append-url="{}" aria-label="Show more blog posts">Show More</a></div>"#,
            html_escape(&self.archive_url),
            html_escape(&self.more_url)
        )
    }

    pub fn placeholder() -> String {
        format!(r#"<div class="no-posts"><p>{}</p></div>"#, NO_POSTS_MESSAGE)
    }

    /// Fresh listing contents: the entries, plus the affordance when the
    /// limit cut the listing short
    pub fn render(&self, registry: &PostRegistry, limit: Option<usize>) -> String {
        if registry.is_empty() {
            return Self::placeholder();
        }

        let view = ListView::new(registry, limit);
        let mut html = self.entries(&view.entries);
        if view.has_more {
            html.push_str(&self.show_more());
        }
        html
    }

    /// The entries following the first `shown` of the listing
    pub fn remaining(&self, registry: &PostRegistry, shown: usize) -> String {
        let sorted = registry.sorted_by_date();
        let rest = sorted.get(shown..).unwrap_or(&[]);
        self.entries(rest)
    }

    /// A fresh listing, or with `append` the entries that follow a
    /// listing already cut to `limit`. An uncut listing has nothing to add.
    pub fn render_with(&self, registry: &PostRegistry, options: ListOptions) -> String {
        if !options.append {
            return self.render(registry, options.limit);
        }
        match options.limit.filter(|&limit| limit > 0) {
            Some(shown) => self.remaining(registry, shown),
            None => String::new(),
        }
    }
}

/// Wrap listing contents in its container element
pub fn list_container(inner: &str) -> String {
    format!(r#"<div id="blog-posts" class="blog-posts">{}</div>"#, inner)
}
