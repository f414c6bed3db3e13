//! blogpress: a small markdown blog renderer
//!
//! A registry of post summaries drives the listing pages; each post is
//! loaded from `{slug}.md`, its front-matter parsed, reading time and
//! outline computed, and the converted body decorated with social meta
//! tags, copy buttons and share links.

pub mod commands;
pub mod config;
pub mod content;
pub mod decorate;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::{FsSource, LoadError, MarkdownRenderer, PostLoader, PostRegistry};
use decorate::{Decorator, HtmlDocument, RenderTarget};
use helpers::{archive_path, full_url_for, post_path, url_for};
use templates::{list_container, ListOptions, ListRenderer};

/// Loader used by the application: markdown files on disk
pub type SiteLoader = PostLoader<FsSource, MarkdownRenderer>;

/// A rendered post page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub html: String,
    /// False when the Not Found view was rendered instead of the post
    pub found: bool,
}

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static assets directory
    pub static_dir: PathBuf,
    /// Validated post registry
    pub registry: PostRegistry,
    loader: Arc<SiteLoader>,
    decorator: Decorator,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Create from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Result<Self> {
        let registry = PostRegistry::new(config.posts.clone())?;

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        let converter =
            MarkdownRenderer::with_options(&config.highlight.theme, config.highlight.enable);
        let loader = PostLoader::new(FsSource::new(&content_dir), converter, &config);
        let decorator = Decorator::new(&config);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
            registry,
            loader: Arc::new(loader),
            decorator,
        })
    }

    pub fn loader(&self) -> &SiteLoader {
        &self.loader
    }

    pub fn list_renderer(&self) -> ListRenderer {
        ListRenderer::new(&self.config)
    }

    /// Absolute URL of a post page
    pub fn post_url(&self, slug: &str) -> String {
        full_url_for(&self.config, &post_path(slug))
    }

    /// Home page: the newest entries up to `home_limit`
    pub fn render_index(&self) -> String {
        let options = ListOptions::limited(self.config.listing_limit());
        let list = self.list_renderer().render_with(&self.registry, options);
        self.listing_page(&self.config.title, "Latest Posts", &list)
    }

    /// Archive page: every entry
    pub fn render_archive(&self) -> String {
        let list = self.list_renderer().render(&self.registry, None);
        let title = templates::page_title("Archive", &self.config);
        self.listing_page(&title, "Archive", &list)
    }

    /// Fragment of the entries past the first `shown`
    pub fn render_more(&self, shown: usize) -> String {
        self.list_renderer()
            .render_with(&self.registry, ListOptions::after(shown))
    }

    fn listing_page(&self, title: &str, heading: &str, list: &str) -> String {
        let mut doc = HtmlDocument::new(title);
        doc.set_body(format!(
            r#"<section class="blog-section"><h2 class="section-title">{}</h2>{}</section>"#,
            heading,
            list_container(list)
        ));
        templates::render_page(&doc, &self.config)
    }

    /// Load, render and decorate the page for `slug`. A post that cannot
    /// be loaded renders the Not Found view.
    pub async fn render_post_page(&self, slug: &str) -> PostPage {
        let mut doc = HtmlDocument::default();

        let found = match self.loader.load(slug) {
            Ok(post) => {
                doc.set_title(&templates::page_title(post.display_title(), &self.config));
                doc.set_body(templates::post_article(&post, &self.config.date_format));
                self.decorator
                    .decorate(&mut doc, &post, &self.post_url(slug))
                    .await;
                true
            }
            Err(e) => {
                match &e {
                    LoadError::NotFound { .. } => tracing::warn!("{}", e),
                    LoadError::Conversion { .. } => tracing::error!("{}", e),
                }
                self.not_found_document(&mut doc);
                false
            }
        };

        PostPage {
            html: templates::render_page(&doc, &self.config),
            found,
        }
    }

    fn not_found_document(&self, doc: &mut HtmlDocument) {
        doc.set_title(&templates::page_title(
            templates::NOT_FOUND_TITLE,
            &self.config,
        ));
        doc.set_body(templates::not_found(&url_for(&self.config, archive_path())));
    }

    /// Generate the static site
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
