//! Social meta tags (Open Graph and Twitter cards)

use super::target::{MetaKey, RenderTarget};
use crate::content::{FrontMatter, DEFAULT_TITLE};

/// Set the social meta tags of `target` from post metadata, creating any
/// that are missing. Absent keys fall back to the default title and an
/// empty description.
pub fn sync_meta_tags(
    target: &mut dyn RenderTarget,
    metadata: &FrontMatter,
    page_url: &str,
    twitter_card: &str,
) {
    let title = metadata.title().unwrap_or(DEFAULT_TITLE);
    let description = metadata.description().unwrap_or("");

    let tags = [
        (MetaKey::property("og:title"), title),
        (MetaKey::property("og:description"), description),
        (MetaKey::property("og:url"), page_url),
        (MetaKey::property("og:type"), "article"),
        (MetaKey::name("twitter:card"), twitter_card),
        (MetaKey::name("twitter:title"), title),
        (MetaKey::name("twitter:description"), description),
    ];

    for (key, content) in tags {
        target.upsert_meta(key, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorate::HtmlDocument;

    #[test]
    fn test_sync_meta_tags() {
        let (fm, _) = FrontMatter::parse("---\ntitle: Antennas\ndescription: RF basics\n---\n");
        let mut doc = HtmlDocument::default();
        sync_meta_tags(&mut doc, &fm, "https://example.com/posts/antenna/", "summary_large_image");

        assert_eq!(doc.meta(&MetaKey::property("og:title")), Some("Antennas"));
        assert_eq!(doc.meta(&MetaKey::property("og:description")), Some("RF basics"));
        assert_eq!(
            doc.meta(&MetaKey::property("og:url")),
            Some("https://example.com/posts/antenna/")
        );
        assert_eq!(doc.meta(&MetaKey::property("og:type")), Some("article"));
        assert_eq!(doc.meta(&MetaKey::name("twitter:card")), Some("summary_large_image"));
        assert_eq!(doc.meta(&MetaKey::name("twitter:title")), Some("Antennas"));
    }

    #[test]
    fn test_defaults_and_idempotence() {
        let mut doc = HtmlDocument::default();
        doc.upsert_meta(MetaKey::property("og:title"), "stale");

        let fm = FrontMatter::default();
        sync_meta_tags(&mut doc, &fm, "u", "summary");
        sync_meta_tags(&mut doc, &fm, "u", "summary");

        assert_eq!(doc.metas().count(), 7);
        assert_eq!(doc.meta(&MetaKey::property("og:title")), Some("Blog Post"));
        assert_eq!(doc.meta(&MetaKey::name("twitter:description")), Some(""));
    }
}
