//! Post-render page decoration: social metadata, copy and share controls,
//! and math typesetting

mod clipboard;
mod code_copy;
mod meta;
mod share;
mod target;
mod typeset;

pub use clipboard::{Clipboard, ClipboardError, CopyControl, CopyState, SystemClipboard, COPY_FEEDBACK};
pub use code_copy::{add_copy_buttons, CHECK_ICON, COPY_ICON};
pub use meta::sync_meta_tags;
pub use share::{add_share_controls, share_controls, SharePlatform, FALLBACK_SHARE_TITLE};
pub use target::{HtmlDocument, MetaAttr, MetaKey, RenderTarget};
pub use typeset::{
    has_math, typeset_when_ready, MathJaxTypesetter, PollPolicy, Typesetter, TypesetError,
};

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::RenderedPost;

/// Applies every decoration step to a rendered post page
#[derive(Clone)]
pub struct Decorator {
    twitter_card: String,
    policy: PollPolicy,
    typesetter: Option<Arc<dyn Typesetter>>,
}

impl Decorator {
    pub fn new(config: &SiteConfig) -> Self {
        let typesetter: Option<Arc<dyn Typesetter>> = if config.math.enable {
            Some(Arc::new(MathJaxTypesetter::from(&config.math)))
        } else {
            None
        };

        Self {
            twitter_card: config.twitter_card.clone(),
            policy: PollPolicy::from(&config.math),
            typesetter,
        }
    }

    /// Replace the typesetting engine
    pub fn with_typesetter(mut self, typesetter: Option<Arc<dyn Typesetter>>) -> Self {
        self.typesetter = typesetter;
        self
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Decorate `target`, whose body already holds the post markup.
    /// Every step can be repeated without duplicating anything. A
    /// typesetting failure is logged and leaves the page usable.
    pub async fn decorate(
        &self,
        target: &mut dyn RenderTarget,
        post: &RenderedPost,
        page_url: &str,
    ) {
        sync_meta_tags(target, &post.metadata, page_url, &self.twitter_card);

        let body = add_copy_buttons(target.body());
        let body = add_share_controls(&body, page_url, Some(post.title()));
        target.set_body(body);

        if let Some(typesetter) = &self.typesetter {
            if let Err(e) = typeset_when_ready(typesetter.as_ref(), target, self.policy).await {
                tracing::warn!("Math typesetting skipped for {}: {}", post.slug, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn post(body: &str) -> RenderedPost {
        let (metadata, _) = FrontMatter::parse("---\ntitle: Port Knocking\n---\n");
        RenderedPost {
            slug: "knock".to_string(),
            metadata,
            reading_time: 1,
            outline: None,
            raw: String::new(),
            content: body.to_string(),
        }
    }

    struct NeverReady;

    impl Typesetter for NeverReady {
        fn is_ready(&self) -> bool {
            false
        }

        fn typeset(&self, _target: &mut dyn RenderTarget) -> Result<(), TypesetError> {
            Err(TypesetError::Failed("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_decorate_is_idempotent() {
        let decorator = Decorator::new(&SiteConfig::default());
        let post = post("<pre><code>knock 1 2 3\n</code></pre><p>$$x^2$$</p>");
        let mut doc = HtmlDocument::new("Port Knocking - Blog");
        doc.set_body(post.content.clone());

        decorator.decorate(&mut doc, &post, "https://example.com/posts/knock/").await;
        let first = doc.clone();
        decorator.decorate(&mut doc, &post, "https://example.com/posts/knock/").await;

        assert_eq!(doc.body(), first.body());
        assert_eq!(doc.body().matches(r#"class="copy-btn""#).count(), 1);
        assert_eq!(doc.body().matches(r#"class="share-buttons""#).count(), 1);
        assert_eq!(doc.metas().count(), 7);
        assert_eq!(doc.head_elements().count(), 1);
        assert!(doc.body().contains("text=Port%20Knocking"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_typesetter_timeout_does_not_fail() {
        let decorator = Decorator::new(&SiteConfig::default())
            .with_typesetter(Some(Arc::new(NeverReady)))
            .with_policy(PollPolicy::new(
                std::time::Duration::from_millis(100),
                std::time::Duration::from_millis(500),
            ));
        let post = post("<p>text</p>");
        let mut doc = HtmlDocument::default();
        doc.set_body(post.content.clone());

        decorator.decorate(&mut doc, &post, "u").await;

        assert!(doc.body().contains("share-buttons"));
        assert_eq!(doc.head_elements().count(), 0);
    }
}
