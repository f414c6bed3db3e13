//! Math typesetting once a typesetting engine becomes available

use std::time::Duration;
use thiserror::Error;

use super::target::RenderTarget;
use crate::config::MathConfig;
use crate::helpers::html_escape;

const MATHJAX_ELEMENT_ID: &str = "mathjax";

#[derive(Debug, Error)]
pub enum TypesetError {
    #[error("typesetter not ready after {0:?}")]
    Timeout(Duration),
    #[error("typesetting failed: {0}")]
    Failed(String),
}

/// A math typesetting engine that may take a while to load
pub trait Typesetter: Send + Sync {
    fn is_ready(&self) -> bool;

    fn typeset(&self, target: &mut dyn RenderTarget) -> Result<(), TypesetError>;
}

/// How often to check for the typesetter and when to give up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

impl PollPolicy {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            timeout,
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&MathConfig::default())
    }
}

impl From<&MathConfig> for PollPolicy {
    fn from(config: &MathConfig) -> Self {
        Self::new(config.poll_interval(), config.timeout())
    }
}

/// Wait for `typesetter` to become ready, checking every `policy.interval`,
/// then typeset `target` exactly once. Gives up after `policy.timeout`.
/// Dropping the returned future cancels the wait.
pub async fn typeset_when_ready(
    typesetter: &dyn Typesetter,
    target: &mut dyn RenderTarget,
    policy: PollPolicy,
) -> Result<(), TypesetError> {
    let wait = async {
        let mut ticker = tokio::time::interval(policy.interval);
        loop {
            // first tick completes immediately
            ticker.tick().await;
            if typesetter.is_ready() {
                break;
            }
        }
    };

    tokio::time::timeout(policy.timeout, wait)
        .await
        .map_err(|_| TypesetError::Timeout(policy.timeout))?;

    typesetter.typeset(target)
}

/// Returns true if the html contains TeX delimiters
pub fn has_math(html: &str) -> bool {
    html.contains("$$") || html.contains("\\(") || html.contains("\\[")
}

/// Typesets by loading MathJax on pages that contain math
#[derive(Debug, Clone)]
pub struct MathJaxTypesetter {
    script_url: String,
    policy: PollPolicy,
}

impl MathJaxTypesetter {
    pub fn new(script_url: &str) -> Self {
        Self {
            script_url: script_url.to_string(),
            policy: PollPolicy::default(),
        }
    }

    /// The poll policy the page script uses while MathJax loads
    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl From<&MathConfig> for MathJaxTypesetter {
    fn from(config: &MathConfig) -> Self {
        Self::new(&config.script_url).with_policy(PollPolicy::from(config))
    }
}

impl Typesetter for MathJaxTypesetter {
    fn is_ready(&self) -> bool {
        true
    }

    fn typeset(&self, target: &mut dyn RenderTarget) -> Result<(), TypesetError> {
        if !has_math(target.body()) {
            return Ok(());
        }
        if self.script_url.is_empty() {
            return Err(TypesetError::Failed("no script url configured".to_string()));
        }

        tracing::debug!("Adding math script {}", self.script_url);
        target.upsert_head_element(
            MATHJAX_ELEMENT_ID,
            format!(
                r#"<script id="{}" async src="{}" data-poll-ms="{}" data-timeout-ms="{}"></script>"#,
                MATHJAX_ELEMENT_ID,
                html_escape(&self.script_url),
                self.policy.interval.as_millis(),
                self.policy.timeout.as_millis()
            ),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorate::HtmlDocument;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Becomes ready on the nth readiness check
    struct SlowTypesetter {
        ready_after: usize,
        checks: AtomicUsize,
        runs: AtomicUsize,
    }

    impl SlowTypesetter {
        fn new(ready_after: usize) -> Self {
            Self {
                ready_after,
                checks: AtomicUsize::new(0),
                runs: AtomicUsize::new(0),
            }
        }
    }

    impl Typesetter for SlowTypesetter {
        fn is_ready(&self) -> bool {
            self.checks.fetch_add(1, Ordering::SeqCst) + 1 >= self.ready_after
        }

        fn typeset(&self, target: &mut dyn RenderTarget) -> Result<(), TypesetError> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            target.set_body(format!("{}<!-- typeset -->", target.body()));
            Ok(())
        }
    }

    fn policy() -> PollPolicy {
        PollPolicy::new(Duration::from_millis(100), Duration::from_secs(1))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_immediately() {
        let typesetter = SlowTypesetter::new(1);
        let mut doc = HtmlDocument::default();
        let start = tokio::time::Instant::now();

        typeset_when_ready(&typesetter, &mut doc, policy()).await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(typesetter.runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_until_ready() {
        let typesetter = SlowTypesetter::new(4);
        let mut doc = HtmlDocument::default();
        let start = tokio::time::Instant::now();

        typeset_when_ready(&typesetter, &mut doc, policy()).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(300));
        assert_eq!(typesetter.checks.load(Ordering::SeqCst), 4);
        assert_eq!(typesetter.runs.load(Ordering::SeqCst), 1);
        assert!(doc.body().ends_with("<!-- typeset -->"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out() {
        let typesetter = SlowTypesetter::new(usize::MAX);
        let mut doc = HtmlDocument::default();

        let err = typeset_when_ready(&typesetter, &mut doc, policy())
            .await
            .unwrap_err();

        assert!(matches!(err, TypesetError::Timeout(d) if d == Duration::from_secs(1)));
        assert_eq!(typesetter.runs.load(Ordering::SeqCst), 0);
        assert!(doc.body().is_empty());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let policy = PollPolicy::new(Duration::ZERO, Duration::from_secs(1));
        assert_eq!(policy.interval, Duration::from_millis(1));
    }

    #[test]
    fn test_mathjax_only_with_math() {
        let typesetter = MathJaxTypesetter::new("https://cdn.example/mathjax.js");

        let mut plain = HtmlDocument::default();
        plain.set_body("<p>cost is 5 dollars</p>".to_string());
        typesetter.typeset(&mut plain).unwrap();
        assert!(plain.head_element(MATHJAX_ELEMENT_ID).is_none());

        let mut math = HtmlDocument::default();
        math.set_body(r"<p>\(e^{i\pi} + 1 = 0\)</p>".to_string());
        typesetter.typeset(&mut math).unwrap();
        typesetter.typeset(&mut math).unwrap();
        assert_eq!(math.head_elements().count(), 1);
        assert!(math
            .head_element(MATHJAX_ELEMENT_ID)
            .unwrap()
            .contains("https://cdn.example/mathjax.js"));
    }

    #[test]
    fn test_mathjax_script_carries_poll_policy() {
        let config = MathConfig {
            poll_interval_ms: 250,
            timeout_ms: 500,
            ..MathConfig::default()
        };
        let typesetter = MathJaxTypesetter::from(&config);

        let mut doc = HtmlDocument::default();
        doc.set_body("<p>$$x^2$$</p>".to_string());
        typesetter.typeset(&mut doc).unwrap();

        let script = doc.head_element(MATHJAX_ELEMENT_ID).unwrap();
        assert!(script.contains(r#"data-poll-ms="250""#));
        assert!(script.contains(r#"data-timeout-ms="500""#));
    }
}
