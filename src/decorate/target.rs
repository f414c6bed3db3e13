//! Render target abstraction and the in-memory HTML document implementing it

use indexmap::IndexMap;

/// Attribute a meta tag is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    /// `<meta property="og:...">`
    Property,
    /// `<meta name="twitter:...">`
    Name,
}

impl MetaAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttr::Property => "property",
            MetaAttr::Name => "name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetaKey {
    pub attr: MetaAttr,
    pub key: String,
}

impl MetaKey {
    pub fn property(key: &str) -> Self {
        Self {
            attr: MetaAttr::Property,
            key: key.to_string(),
        }
    }

    pub fn name(key: &str) -> Self {
        Self {
            attr: MetaAttr::Name,
            key: key.to_string(),
        }
    }
}

/// Surface a page is rendered into
pub trait RenderTarget: Send {
    fn set_title(&mut self, title: &str);

    fn body(&self) -> &str;

    fn set_body(&mut self, html: String);

    fn meta(&self, key: &MetaKey) -> Option<&str>;

    /// Find the meta element for `key`, creating it when missing, and set
    /// its content
    fn upsert_meta(&mut self, key: MetaKey, content: &str);

    fn head_element(&self, id: &str) -> Option<&str>;

    /// Find-or-create a keyed element in the document head
    fn upsert_head_element(&mut self, id: &str, markup: String);
}

/// A page held in memory until it is serialized by the layout
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    title: String,
    metas: IndexMap<MetaKey, String>,
    head: IndexMap<String, String>,
    body: String,
}

impl HtmlDocument {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Meta tags in creation order
    pub fn metas(&self) -> impl Iterator<Item = (&MetaKey, &str)> {
        self.metas.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Extra head markup in creation order
    pub fn head_elements(&self) -> impl Iterator<Item = &str> {
        self.head.values().map(String::as_str)
    }
}

impl RenderTarget for HtmlDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn set_body(&mut self, html: String) {
        self.body = html;
    }

    fn meta(&self, key: &MetaKey) -> Option<&str> {
        self.metas.get(key).map(String::as_str)
    }

    fn upsert_meta(&mut self, key: MetaKey, content: &str) {
        self.metas.insert(key, content.to_string());
    }

    fn head_element(&self, id: &str) -> Option<&str> {
        self.head.get(id).map(String::as_str)
    }

    fn upsert_head_element(&mut self, id: &str, markup: String) {
        self.head.insert(id.to_string(), markup);
    }
}
