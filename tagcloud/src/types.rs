//! Core data types for tag clouds.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A taxonomy tag as supplied by the site's content index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// The tag's identifier, also its default display text.
    pub name: String,
    /// Site path of the tag's listing page, resolved to a URL at render time.
    pub path: String,
    /// Number of posts carrying this tag.
    #[serde(default)]
    pub length: usize,
}

impl Tag {
    /// Creates a new tag.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tagcloud::Tag;
    ///
    /// let tag = Tag::new("rust", "tags/rust/", 12);
    /// assert_eq!(tag.length, 12);
    /// ```
    pub fn new(name: impl Into<String>, path: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            length,
        }
    }
}

/// Direction of a field sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Builds a direction from the integer multiplier used by template options.
    ///
    /// Negative values sort descending; everything else (including `0`) sorts
    /// ascending.
    pub fn from_multiplier(order: i64) -> Self {
        if order < 0 {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The tag fields a collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Path,
    Length,
}

impl SortField {
    /// Looks up a field by its option name. Returns `None` for unknown fields.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "path" => Some(Self::Path),
            "length" => Some(Self::Length),
            _ => None,
        }
    }

    /// Compares two tags on this field in ascending order.
    ///
    /// Text fields compare by UTF-16 code units, so characters outside the
    /// Basic Multilingual Plane sort before U+E000..U+FFFF as they do in
    /// template engines.
    pub fn compare(self, a: &Tag, b: &Tag) -> Ordering {
        match self {
            Self::Name => a.name.encode_utf16().cmp(b.name.encode_utf16()),
            Self::Path => a.path.encode_utf16().cmp(b.path.encode_utf16()),
            Self::Length => a.length.cmp(&b.length),
        }
    }
}

/// An ordered sequence of tags.
///
/// Every reordering operation consumes the collection and returns the new
/// order, so a caller keeps its own copy untouched by cloning first.
///
/// ## Examples
///
/// ```
/// use tagcloud::{SortOrder, Tag, TagCollection};
///
/// let tags: TagCollection = vec![
///     Tag::new("b", "/b", 2),
///     Tag::new("a", "/a", 7),
///     Tag::new("c", "/c", 4),
/// ]
/// .into();
///
/// let top = tags.sorted("length", SortOrder::Descending).limited(2);
/// let names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();
/// assert_eq!(names, ["a", "c"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCollection(Vec<Tag>);

impl TagCollection {
    /// Wraps an ordered list of tags.
    pub fn new(tags: Vec<Tag>) -> Self {
        Self(tags)
    }

    /// Returns the number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the tags in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    /// Returns the tags as a slice.
    pub fn as_slice(&self) -> &[Tag] {
        &self.0
    }

    /// Unwraps into the underlying vector.
    pub fn into_vec(self) -> Vec<Tag> {
        self.0
    }

    /// Stable-sorts by the named field.
    ///
    /// Tags that compare equal keep their relative order in both directions.
    /// An unrecognized field name leaves the order as it was.
    pub fn sorted(mut self, field: &str, order: SortOrder) -> Self {
        match SortField::from_name(field) {
            Some(field) => self.0.sort_by(|a, b| order.apply(field.compare(a, b))),
            None => tracing::debug!(field, "Unknown sort field, keeping input order"),
        }
        self
    }

    /// Shuffles into a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.0.shuffle(rng);
        self
    }

    /// Keeps only the first `amount` tags.
    pub fn limited(mut self, amount: usize) -> Self {
        self.0.truncate(amount);
        self
    }
}

impl From<Vec<Tag>> for TagCollection {
    fn from(tags: Vec<Tag>) -> Self {
        Self(tags)
    }
}

impl From<&[Tag]> for TagCollection {
    fn from(tags: &[Tag]) -> Self {
        Self(tags.to_vec())
    }
}

impl FromIterator<Tag> for TagCollection {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TagCollection {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagCollection {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
