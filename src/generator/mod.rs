//! Generator module - writes the site into the public directory

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::helpers::{archive_path, more_path, post_path, url_for};
use crate::templates::{BLOG_JS, BLOG_JS_PATH};
use crate::Blog;

/// One entry of `posts.json`
#[derive(Debug, Serialize)]
struct SearchEntry<'a> {
    slug: &'a str,
    title: &'a str,
    date: String,
    description: &'a str,
    tags: &'a [String],
    url: String,
}

/// Counts reported after a generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub posts: usize,
    pub missing: usize,
    pub assets: usize,
}

/// Static site generator
pub struct Generator {
    blog: Blog,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Self {
        Self { blog: blog.clone() }
    }

    /// Generate the entire site
    pub async fn generate(&self) -> Result<GenerateStats> {
        let public_dir = &self.blog.public_dir;
        fs::create_dir_all(public_dir)?;

        let mut stats = GenerateStats {
            assets: self.copy_static_assets()?,
            ..GenerateStats::default()
        };

        self.write("index.html", &self.blog.render_index())?;
        self.write(
            &format!("{}index.html", archive_path()),
            &self.blog.render_archive(),
        )?;

        let shown = self
            .blog
            .config
            .listing_limit()
            .unwrap_or(self.blog.registry.len());
        self.write(more_path(), &self.blog.render_more(shown))?;

        for post in self.blog.registry.sorted_by_date() {
            let page = self.blog.render_post_page(&post.slug).await;
            if page.found {
                stats.posts += 1;
            } else {
                tracing::warn!("No content for registered post {}", post.slug);
                stats.missing += 1;
            }
            self.write(&format!("{}index.html", post_path(&post.slug)), &page.html)?;
        }

        self.generate_search_index()?;
        self.write(BLOG_JS_PATH, BLOG_JS)?;

        Ok(stats)
    }

    /// Write `content` to a path relative to the public directory
    fn write(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.blog.public_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }

    /// Generate the JSON index of the registry in listing order
    fn generate_search_index(&self) -> Result<()> {
        let config = &self.blog.config;
        let entries: Vec<SearchEntry> = self
            .blog
            .registry
            .sorted_by_date()
            .into_iter()
            .map(|p| SearchEntry {
                slug: &p.slug,
                title: &p.title,
                date: p.date.format("%Y-%m-%d").to_string(),
                description: &p.description,
                tags: &p.tags,
                url: url_for(config, &post_path(&p.slug)),
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries)?;
        self.write("posts.json", &json)
    }

    /// Copy the static directory verbatim, returning the number of files
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.blog.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }
        copy_dir(static_dir, &self.blog.public_dir)
    }
}

fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(from).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }

        let relative = entry.path().strip_prefix(from)?;
        let dest = to.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        copied += 1;
    }

    Ok(copied)
}
