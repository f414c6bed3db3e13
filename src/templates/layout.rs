//! Full page layout around a rendered document

use crate::config::SiteConfig;
use crate::decorate::{HtmlDocument, RenderTarget};
use crate::helpers::{archive_path, html_escape, js, meta_generator, url_for};

use super::BLOG_JS_PATH;

/// Serialize `doc` into a complete HTML page
pub fn render_page(doc: &HtmlDocument, config: &SiteConfig) -> String {
    let metas: String = doc
        .metas()
        .map(|(key, content)| {
            format!(
                r#"<meta {}="{}" content="{}">"#,
                key.attr.as_str(),
                html_escape(&key.key),
                html_escape(content)
            )
        })
        .collect();
    let head_extra: String = doc.head_elements().collect();

    let description = if config.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<meta name="description" content="{}">"#,
            html_escape(&config.description)
        )
    };

    let home = url_for(config, "/");
    let archive = url_for(config, archive_path());

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{description}{generator}{metas}{head_extra}{script}
</head>
<body>
<header class="site-header"><a class="logo" href="{home}">{site_title}</a><nav><a href="{home}">Home</a><a href="{archive}">Archive</a></nav></header>
<main id="article-content" class="container">{body}</main>
<footer class="site-footer"><p>&copy; {author}</p></footer>
</body>
</html>
"#,
        lang = html_escape(&config.language),
        title = html_escape(doc.title()),
        description = description,
        generator = meta_generator(),
        metas = metas,
        head_extra = head_extra,
        script = js(&url_for(config, BLOG_JS_PATH)),
        home = html_escape(&home),
        site_title = html_escape(&config.title),
        archive = html_escape(&archive),
        body = doc.body(),
        author = html_escape(&config.author),
    )
}

/// Document title of a post page
pub fn page_title(title: &str, config: &SiteConfig) -> String {
    format!("{} - {}", title, config.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorate::MetaKey;

    #[test]
    fn test_render_page() {
        let config = SiteConfig {
            title: "Manas".to_string(),
            ..SiteConfig::default()
        };
        let mut doc = HtmlDocument::new(&page_title("Antennas", &config));
        doc.upsert_meta(MetaKey::property("og:title"), "Antennas \"RF\"");
        doc.upsert_head_element("mathjax", "<script id=\"mathjax\"></script>".to_string());
        doc.set_body("<p>hi</p>".to_string());

        let html = render_page(&doc, &config);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Antennas - Manas</title>"));
        assert!(html.contains(r#"<meta property="og:title" content="Antennas &quot;RF&quot;">"#));
        assert!(html.contains(r#"<script id="mathjax"></script>"#));
        assert!(html.contains(r#"<script src="/js/blog.js" defer></script>"#));
        assert!(html.contains("<p>hi</p>"));
        assert!(html.contains(r#"<a href="/archive/">Archive</a>"#));
    }
}
