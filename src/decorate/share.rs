//! Share links for a post page

use std::fmt;
use std::str::FromStr;

use crate::helpers::{encode_component, html_escape};

/// Title used in share links when the page has none
pub const FALLBACK_SHARE_TITLE: &str = "Check out this post";

const SHARE_BUTTONS_CLASS: &str = r#"class="share-buttons""#;

const TWITTER_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor"><path d="M23 3a10.9 10.9 0 01-3.14 1.53 4.48 4.48 0 00-7.86 3v1A10.66 10.66 0 013 4s-4 9 5 13a11.64 11.64 0 01-7 2c9 5 20 0 20-11.5a4.5 4.5 0 00-.08-.83A7.72 7.72 0 0023 3z"></path></svg>"#;

const LINKEDIN_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor"><path d="M16 8a6 6 0 016 6v7h-4v-7a2 2 0 00-2-2 2 2 0 00-2 2v7h-4v-7a6 6 0 016-6zM2 9h4v12H2z"></path><circle cx="4" cy="4" r="2"></circle></svg>"#;

const LINK_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M10 13a5 5 0 007.54.54l3-3a5 5 0 00-7.07-7.07l-1.72 1.71"></path><path d="M14 11a5 5 0 00-7.54-.54l-3 3a5 5 0 007.07 7.07l1.71-1.71"></path></svg>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    LinkedIn,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 2] = [SharePlatform::Twitter, SharePlatform::LinkedIn];

    pub fn as_str(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "twitter",
            SharePlatform::LinkedIn => "linkedin",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::LinkedIn => "LinkedIn",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => TWITTER_ICON,
            SharePlatform::LinkedIn => LINKEDIN_ICON,
        }
    }

    /// URL that opens the platform's share dialog for `page_url`
    pub fn share_url(&self, page_url: &str, title: &str) -> String {
        match self {
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encode_component(page_url),
                encode_component(title)
            ),
            SharePlatform::LinkedIn => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                encode_component(page_url)
            ),
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(SharePlatform::Twitter),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            other => Err(format!(
                "unknown platform: {}. Available: twitter, linkedin",
                other
            )),
        }
    }
}

/// Footer with one share link per platform and a copy-link control
pub fn share_controls(page_url: &str, title: Option<&str>) -> String {
    let title = title.unwrap_or(FALLBACK_SHARE_TITLE);

    let links: String = SharePlatform::ALL
        .iter()
        .map(|platform| {
            format!(
                r#"<a href="{}" class="share-btn {}" target="_blank" rel="noopener" data-share-window="width=600,height=400" aria-label="Share on {}">{}</a>"#,
                html_escape(&platform.share_url(page_url, title)),
                platform.as_str(),
                platform.label(),
                platform.icon()
            )
        })
        .collect();

    format!(
        r#"<div class="post-footer"><div {}><span>Share:</span>{}<button type="button" class="share-btn copy" data-copy-url="{}" aria-label="Copy link">{}</button></div></div>"#,
        SHARE_BUTTONS_CLASS,
        links,
        html_escape(page_url),
        LINK_ICON
    )
}

/// Append the share footer to `body` unless one is already there
pub fn add_share_controls(body: &str, page_url: &str, title: Option<&str>) -> String {
    if body.contains(SHARE_BUTTONS_CLASS) {
        return body.to_string();
    }
    format!("{}{}", body, share_controls(page_url, title))
}
