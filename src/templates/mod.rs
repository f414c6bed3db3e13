//! Built-in page templates
//!
//! Markup is produced with `format!`; the client script is embedded in the
//! binary.

mod layout;
mod list;
mod post;

pub use layout::{page_title, render_page};
pub use list::{list_container, ListOptions, ListRenderer, ListView, NO_POSTS_MESSAGE};
pub use post::{not_found, post_article, NOT_FOUND_TITLE};

/// Client script wiring copy buttons, share links, "Show More" and math
pub const BLOG_JS: &str = include_str!("blog.js");

/// Site-relative location of [`BLOG_JS`]
pub const BLOG_JS_PATH: &str = "js/blog.js";
