//! The page-rendering context a tag cloud is rendered in.

use url::Url;

use crate::types::TagCollection;

/// Services the host template engine provides to the renderer.
pub trait RenderContext {
    /// Maps a tag path to the URL written into the anchor's `href`.
    fn url_for(&self, path: &str) -> String;

    /// The site-wide tag collection, used when the caller passes no tags.
    fn default_tags(&self) -> Option<&TagCollection> {
        None
    }
}

impl<T: RenderContext + ?Sized> RenderContext for &T {
    fn url_for(&self, path: &str) -> String {
        (**self).url_for(path)
    }

    fn default_tags(&self) -> Option<&TagCollection> {
        (**self).default_tags()
    }
}

/// A context for a site served under a root path.
///
/// ## Examples
///
/// ```
/// use tagcloud::{RenderContext, SiteContext};
///
/// let site = SiteContext::new("/blog");
/// assert_eq!(site.url_for("tags/rust/"), "/blog/tags/rust/");
/// assert_eq!(site.url_for("/tags/rust/"), "/blog/tags/rust/");
/// assert_eq!(site.url_for("https://example.com/t"), "https://example.com/t");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    root: String,
    tags: Option<TagCollection>,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new("/")
    }
}

impl SiteContext {
    /// Creates a context for a site rooted at `root`.
    ///
    /// The root always starts and ends with a slash.
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let trimmed = root.trim_matches('/');
        let root = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };

        Self { root, tags: None }
    }

    /// Sets the site-wide tag collection.
    pub fn with_tags(mut self, tags: impl Into<TagCollection>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }
}

impl RenderContext for SiteContext {
    /// Prefixes the site root onto site-relative paths.
    ///
    /// Fragments (`#top`), protocol-relative (`//cdn`) and absolute URLs are
    /// returned untouched.
    fn url_for(&self, path: &str) -> String {
        if path.starts_with('#') || path.starts_with("//") || is_absolute_url(path) {
            return path.to_string();
        }

        collapse_slashes(&format!("{}{}", self.root, path))
    }

    fn default_tags(&self) -> Option<&TagCollection> {
        self.tags.as_ref()
    }
}

fn is_absolute_url(path: &str) -> bool {
    Url::parse(path).is_ok()
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_slash = false;
    for c in path.chars() {
        if c == '/' && previous_slash {
            continue;
        }
        previous_slash = c == '/';
        out.push(c);
    }
    out
}
