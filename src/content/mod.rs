//! Content module - post registry, post loading and markdown processing

mod frontmatter;
pub mod loader;
mod markdown;
pub mod outline;
mod post;
mod registry;

pub use frontmatter::FrontMatter;
pub use loader::{ContentSource, FsSource, LoadError, PostLoader};
pub use markdown::{MarkdownConverter, MarkdownRenderer};
pub use outline::{HeadingEntry, Outline};
pub use post::{reading_time, RenderedPost, DEFAULT_TITLE, UNTITLED};
pub use registry::{is_valid_slug, PostRegistry, PostSummary, RegistryError};

#[cfg(test)]
pub(crate) use registry::summary;
