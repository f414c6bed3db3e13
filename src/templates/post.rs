//! Single post markup

use crate::content::RenderedPost;
use crate::helpers::{display_date, html_escape, link_to};

const CLOCK_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="12" cy="12" r="10"></circle><polyline points="12 6 12 12 16 14"></polyline></svg>"#;

pub const NOT_FOUND_TITLE: &str = "Post Not Found";

/// Header, outline and body of a post
pub fn post_article(post: &RenderedPost, date_format: &str) -> String {
    let outline = match &post.outline {
        Some(outline) => format!(
            r#"<nav class="table-of-contents" role="navigation" aria-label="Table of contents">{}</nav>"#,
            outline.to_html()
        ),
        None => String::new(),
    };

    format!(
        r#"<header class="post-header"><span class="post-date">{date}</span><h1 class="post-title">{title}</h1><div class="post-meta"><span class="reading-time" aria-label="Estimated reading time">{icon} {minutes} min read</span></div></header>{outline}<div class="post-content">{content}</div>"#,
        date = html_escape(&display_date(post.metadata.pub_date(), date_format)),
        title = html_escape(post.title()),
        icon = CLOCK_ICON,
        minutes = post.reading_time,
        outline = outline,
        content = post.content,
    )
}

/// The fixed view shown for any post that cannot be loaded
pub fn not_found(archive_url: &str) -> String {
    format!(
        r#"<div class="error"><h2>{}</h2><p>The blog post you're looking for doesn't exist or could not be loaded.</p>{}</div>"#,
        NOT_FOUND_TITLE,
        link_to(&html_escape(archive_url), "Back to Archive", Some("back-link"))
    )
}
