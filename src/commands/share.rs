//! Print share links for a post

use anyhow::Result;

use crate::decorate::{Clipboard, CopyControl, SharePlatform, SystemClipboard};
use crate::Blog;

/// Share links for `slug`, one `platform: url` line each
pub fn share_links(blog: &Blog, slug: &str, platform: Option<SharePlatform>) -> Result<Vec<String>> {
    let Some(post) = blog.registry.get(slug) else {
        anyhow::bail!("Unknown post: {}", slug);
    };

    let url = blog.post_url(slug);
    let platforms = match platform {
        Some(p) => vec![p],
        None => SharePlatform::ALL.to_vec(),
    };

    Ok(platforms
        .into_iter()
        .map(|p| format!("{}: {}", p, p.share_url(&url, &post.title)))
        .collect())
}

/// Print share links; with `copy` also put the post URL on the clipboard.
/// Clipboard failures are logged and do not fail the command.
pub async fn run(blog: &Blog, slug: &str, platform: Option<SharePlatform>, copy: bool) -> Result<()> {
    for line in share_links(blog, slug, platform)? {
        println!("{}", line);
    }

    if copy {
        let url = blog.post_url(slug);
        match SystemClipboard::detect() {
            Ok(clipboard) => copy_with_feedback(&clipboard, &url),
            Err(e) => tracing::warn!("Cannot copy link: {}", e),
        }
    }

    Ok(())
}

fn copy_with_feedback(clipboard: &dyn Clipboard, url: &str) {
    let control = CopyControl::default();
    if control.press(clipboard, url).is_ok() {
        println!("Copied {}", url);
    }
}
