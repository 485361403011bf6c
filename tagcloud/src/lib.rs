//! Tag cloud rendering for static-site templates.
//!
//! This library turns a collection of taxonomy tags into a string of HTML
//! anchors whose font sizes scale with how often each tag is used. It is meant
//! to be called from a page template helper: every input arrangement produces
//! a string, and malformed options degrade to their defaults instead of
//! aborting the page build.
//!
//! ## Core Types
//!
//! - [`Tag`] - A single tag with its link path and usage count
//! - [`TagCollection`] - An ordered set of tags (sort, shuffle, limit)
//! - [`RenderOptions`] - Font bounds, ordering, limits, and separator
//!
//! ## Rendering
//!
//! - [`render_tag_cloud`] - Render tags to HTML using a [`RenderContext`]
//! - [`render_tag_cloud_with_rng`] - Same, with an explicit RNG for random ordering
//! - [`SiteContext`] - Root-relative URL resolution plus the site-wide tag set
//!
//! ## Examples
//!
//! ```
//! use tagcloud::{render_tag_cloud, RenderOptions, SiteContext, Tag};
//!
//! let tags = vec![Tag::new("a", "/a", 1), Tag::new("b", "/b", 5)];
//! let html = render_tag_cloud(Some(&tags), None, &SiteContext::default());
//!
//! assert_eq!(
//!     html,
//!     concat!(
//!         r#"<a class="post-tag button" href="/a" ref="tag" style="font-size: 10.00px;">a</a> "#,
//!         r#"<a class="post-tag button" href="/b" ref="tag" style="font-size: 20.00px;">b</a>"#,
//!     )
//! );
//! ```

pub mod color;
mod context;
mod error;
mod link;
mod options;
mod render;
mod types;

pub use color::Color;
pub use context::{RenderContext, SiteContext};
pub use error::{ColorError, OptionsError};
pub use link::TagLink;
pub use options::{OrderBy, RenderOptions, Transform};
pub use render::{font_size_ranks, render_tag_cloud, render_tag_cloud_with_rng};
pub use types::{SortField, SortOrder, Tag, TagCollection};
