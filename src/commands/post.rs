//! Render a single post page

use anyhow::Result;

use crate::Blog;

/// Print the page for `slug` to stdout. A post that cannot be loaded
/// prints the Not Found page to stderr and fails.
pub async fn run(blog: &Blog, slug: &str) -> Result<()> {
    let page = blog.render_post_page(slug).await;

    if !page.found {
        eprint!("{}", page.html);
        anyhow::bail!("Post not found: {}", slug);
    }

    print!("{}", page.html);
    Ok(())
}
