//! List the post registry

use anyhow::Result;
use std::fmt::Write;

use crate::helpers::format_date;
use crate::templates::{ListView, NO_POSTS_MESSAGE};
use crate::Blog;

/// Registry entries in listing order, one per line
pub fn listing(blog: &Blog, limit: Option<usize>) -> String {
    if blog.registry.is_empty() {
        return format!("{}\n", NO_POSTS_MESSAGE);
    }

    let view = ListView::new(&blog.registry, limit);
    let mut out = String::new();
    let _ = writeln!(out, "Posts ({}):", blog.registry.len());
    for post in &view.entries {
        let _ = writeln!(
            out,
            "  {} - {} [{}]",
            format_date(&post.date, "%Y-%m-%d"),
            post.title,
            post.slug
        );
        if !post.tags.is_empty() {
            let _ = writeln!(out, "      tags: {}", post.tags.join(", "));
        }
    }
    if view.has_more {
        let _ = writeln!(
            out,
            "  ... {} more",
            blog.registry.len() - view.entries.len()
        );
    }
    out
}

/// Print the registry, newest first
pub fn run(blog: &Blog, limit: Option<usize>) -> Result<()> {
    print!("{}", listing(blog, limit));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_blog;

    #[test]
    fn test_listing() {
        let (_dir, blog) = test_blog();
        let out = listing(&blog, Some(2));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Posts (3):");
        assert_eq!(lines[1], "  2026-02-11 - Infrastructure Patterns [infra]");
        assert_eq!(lines[2], "  2024-06-05 - Antenna Theory [antenna]");
        assert_eq!(lines[3], "  ... 1 more");
    }

    #[test]
    fn test_listing_all() {
        let (_dir, blog) = test_blog();
        let out = listing(&blog, None);
        assert!(!out.contains("more"));
        assert!(out.contains("[missing]"));
    }
}
