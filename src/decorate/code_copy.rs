//! Copy-to-clipboard buttons on code blocks

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref PRE_BLOCK: Regex = Regex::new(r"(?s)<pre\b[^>]*>.*?</pre>").unwrap();
}

pub const COPY_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect><path d="M5 15H4a2 2 0 01-2-2V4a2 2 0 012-2h9a2 2 0 012 2v1"></path></svg>"#;

pub const CHECK_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polyline points="20 6 9 17 4 12"></polyline></svg>"#;

const COPY_BUTTON_CLASS: &str = r#"class="copy-btn""#;

fn copy_button() -> String {
    format!(
        r#"<button {} type="button" aria-label="Copy code to clipboard">{}</button>"#,
        COPY_BUTTON_CLASS, COPY_ICON
    )
}

/// Append a copy button inside every `<pre><code>` block that lacks one.
/// Running it again over its own output changes nothing.
pub fn add_copy_buttons(html: &str) -> String {
    PRE_BLOCK
        .replace_all(html, |caps: &Captures| {
            let block = &caps[0];
            if !block.contains("<code") || block.contains(COPY_BUTTON_CLASS) {
                return block.to_string();
            }
            let end = block.len() - "</pre>".len();
            format!("{}{}</pre>", &block[..end], copy_button())
        })
        .into_owned()
}
