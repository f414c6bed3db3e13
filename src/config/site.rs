//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::content::PostSummary;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Listing
    /// Entries shown on the home page before the "Show More" affordance
    pub home_limit: Option<usize>,
    pub date_format: String,

    // Post
    pub words_per_minute: usize,
    pub outline_min_headings: usize,
    pub twitter_card: String,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub math: MathConfig,

    /// The post registry, in authoring order
    #[serde(default)]
    pub posts: Vec<PostSummary>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            content_dir: "blog".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            home_limit: Some(1),
            date_format: "%b %-d, %Y".to_string(),

            words_per_minute: 200,
            outline_min_headings: 3,
            twitter_card: "summary_large_image".to_string(),
            highlight: HighlightConfig::default(),
            math: MathConfig::default(),

            posts: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The home page limit; `0` counts as no limit
    pub fn listing_limit(&self) -> Option<usize> {
        self.home_limit.filter(|&limit| limit > 0)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

/// Math typesetting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    pub enable: bool,
    pub script_url: String,
    pub poll_interval_ms: u64,
    pub timeout_ms: u64,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            enable: true,
            script_url: "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js".to_string(),
            poll_interval_ms: 100,
            timeout_ms: 10_000,
        }
    }
}

impl MathConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
