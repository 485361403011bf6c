//! A single sized tag anchor.

use std::fmt;

/// CSS classes carried by every tag anchor.
const TAG_CLASS: &str = "post-tag button";

/// Relationship marker written as the anchor's `ref` attribute.
const TAG_REF: &str = "tag";

/// One anchor in a tag cloud: display text, destination, and font size.
///
/// ## Examples
///
/// ```
/// use tagcloud::TagLink;
///
/// let link = TagLink::new("rust", "/tags/rust/", 14.5, "px");
/// assert_eq!(
///     link.to_html(),
///     r#"<a class="post-tag button" href="/tags/rust/" ref="tag" style="font-size: 14.50px;">rust</a>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TagLink {
    /// The text inside the anchor
    display: String,
    /// The resolved URL
    href: String,
    /// Font size in `unit`s
    font_size: f64,
    /// CSS unit suffix
    unit: String,
}

impl TagLink {
    pub fn new(
        display: impl Into<String>,
        href: impl Into<String>,
        font_size: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            display: display.into(),
            href: href.into(),
            font_size,
            unit: unit.into(),
        }
    }

    // -------------------------------------------------------------------------
    // Getters
    // -------------------------------------------------------------------------

    /// Returns the display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the resolved URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the unrounded font size.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Returns the CSS unit suffix.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The inline style, with the size rounded to two decimals.
    ///
    /// Sizes exactly halfway between two hundredths round away from zero
    /// (`10.125` becomes `10.13`).
    pub fn style(&self) -> String {
        format!("font-size: {}{};", format_hundredths(self.font_size), self.unit)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Renders the anchor with the display text and href written verbatim.
    ///
    /// Nothing is escaped: a tag name containing markup is emitted as markup.
    pub fn to_html(&self) -> String {
        format!(
            r#"<a class="{}" href="{}" ref="{}" style="{}">{}</a>"#,
            TAG_CLASS,
            self.href,
            TAG_REF,
            self.style(),
            self.display
        )
    }

    /// Renders the anchor with the href and display text HTML-escaped.
    pub fn to_html_escaped(&self) -> String {
        format!(
            r#"<a class="{}" href="{}" ref="{}" style="{}">{}</a>"#,
            TAG_CLASS,
            html_escape::encode_double_quoted_attribute(&self.href),
            TAG_REF,
            html_escape::encode_double_quoted_attribute(&self.style()),
            html_escape::encode_text(&self.display)
        )
    }
}

impl fmt::Display for TagLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Formats a number with two decimals, rounding exact halves away from zero.
///
/// Only an odd number of eighths lies exactly halfway between two hundredths;
/// `{:.2}` would round those to even.
fn format_hundredths(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (value * 100.0).round() / 100.0);
    }
    format!("{value:.2}")
}
