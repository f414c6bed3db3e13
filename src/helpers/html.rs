//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
/// Reverse of [`html_escape`], plus the numeric quote entity syntect emits
pub fn html_unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
/// Text content of an HTML fragment, as a browser would report it
pub fn text_content(html: &str) -> String {
    html_unescape(&strip_html(html))
}

/// Generate an anchor tag
pub fn link_to(href: &str, text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#"<a href="{}" class="{}">{}</a>"#, href, class, text),
        None => format!(r#"<a href="{}">{}</a>"#, href, text),
    }
}

/// Generate a JavaScript script tag
pub fn js(src: &str) -> String {
    format!(r#"<script src="{}" defer></script>"#, src)
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="blogpress {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}
