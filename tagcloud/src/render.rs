//! Tag cloud rendering.

use rand::Rng;

use crate::context::RenderContext;
use crate::link::TagLink;
use crate::options::{OrderBy, RenderOptions};
use crate::types::{Tag, TagCollection};

/// Renders a tag cloud as a string of HTML anchors.
///
/// - `tags`: the tags to render, or `None` to use [`RenderContext::default_tags`]
/// - `options`: render options, or `None` for [`RenderOptions::default`]
/// - `ctx`: resolves tag paths to URLs and supplies the default tags
///
/// Returns an empty string when there are no tags. The caller's tags are
/// never reordered; sorting, shuffling and limiting work on a copy.
///
/// ## Examples
///
/// ```
/// use tagcloud::{render_tag_cloud, RenderOptions, SiteContext, Tag};
///
/// let tags = vec![
///     Tag::new("rust", "tags/rust/", 9),
///     Tag::new("go", "tags/go/", 3),
///     Tag::new("zig", "tags/zig/", 1),
/// ];
/// let options = RenderOptions::new()
///     .with_orderby("length")
///     .with_order(-1)
///     .with_amount(2)
///     .with_separator("\n");
///
/// let html = render_tag_cloud(Some(&tags), Some(&options), &SiteContext::new("/blog"));
/// let lines: Vec<&str> = html.lines().collect();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].contains(r#"href="/blog/tags/rust/""#));
/// assert!(lines[0].contains("font-size: 20.00px;"));
/// assert!(lines[1].contains("font-size: 10.00px;"));
/// ```
pub fn render_tag_cloud<C>(tags: Option<&[Tag]>, options: Option<&RenderOptions>, ctx: &C) -> String
where
    C: RenderContext + ?Sized,
{
    render_tag_cloud_with_rng(tags, options, ctx, &mut rand::thread_rng())
}

/// Renders a tag cloud, drawing random ordering from `rng`.
///
/// Identical to [`render_tag_cloud`] except that `orderby: "random"` shuffles
/// with the supplied generator, so a seeded RNG gives a reproducible order.
pub fn render_tag_cloud_with_rng<C, R>(
    tags: Option<&[Tag]>,
    options: Option<&RenderOptions>,
    ctx: &C,
    rng: &mut R,
) -> String
where
    C: RenderContext + ?Sized,
    R: Rng + ?Sized,
{
    let tags: &[Tag] = match tags {
        Some(tags) => tags,
        None => ctx
            .default_tags()
            .map(TagCollection::as_slice)
            .unwrap_or_default(),
    };

    if tags.is_empty() {
        tracing::debug!("No tags to render, returning an empty tag cloud");
        return String::new();
    }

    let default_options;
    let options = match options {
        Some(options) => options,
        None => {
            default_options = RenderOptions::default();
            &default_options
        }
    };

    // Gradient colors are validated but never written to the output.
    let color = options.effective_color();

    let working = TagCollection::from(tags);
    let working = match &options.orderby {
        OrderBy::Random => working.shuffled(rng),
        OrderBy::Field(field) => working.sorted(field, options.order),
    };
    let working = match options.amount {
        Some(amount) if amount > 0 => working.limited(amount),
        _ => working,
    };

    let sizes = font_size_ranks(working.as_slice(), options.min_font, options.max_font);

    let html = working
        .iter()
        .zip(sizes)
        .map(|(tag, font_size)| {
            let link = TagLink::new(
                options.display_name(&tag.name),
                ctx.url_for(&tag.path),
                font_size,
                options.unit.as_str(),
            );
            if options.escape_html {
                link.to_html_escaped()
            } else {
                link.to_html()
            }
        })
        .collect::<Vec<_>>()
        .join(options.separator.as_str());

    tracing::debug!(
        input = tags.len(),
        rendered = working.len(),
        orderby = ?options.orderby,
        color,
        "Rendered tag cloud"
    );

    html
}

/// Computes each tag's font size from the rank of its usage count.
///
/// The distinct `length` values are ranked in ascending order. A tag whose
/// length has rank `i` out of `n` distinct lengths gets
/// `min_font + (max_font - min_font) * i / (n - 1)`; when every tag shares one
/// length, every size is `min_font`. Sizes are returned in the order of
/// `tags`.
///
/// ## Examples
///
/// ```
/// use tagcloud::{font_size_ranks, Tag};
///
/// let tags = [Tag::new("a", "/a", 50), Tag::new("b", "/b", 2), Tag::new("c", "/c", 7)];
/// assert_eq!(font_size_ranks(&tags, 10.0, 20.0), [20.0, 10.0, 15.0]);
/// ```
pub fn font_size_ranks(tags: &[Tag], min_font: f64, max_font: f64) -> Vec<f64> {
    let mut distinct: Vec<usize> = tags.iter().map(|tag| tag.length).collect();
    distinct.sort_unstable();
    distinct.dedup();

    let rank_count = distinct.len().saturating_sub(1);

    tags.iter()
        .map(|tag| {
            let ratio = if rank_count > 0 {
                let (Ok(index) | Err(index)) = distinct.binary_search(&tag.length);
                index as f64 / rank_count as f64
            } else {
                0.0
            };
            min_font + (max_font - min_font) * ratio
        })
        .collect()
}
