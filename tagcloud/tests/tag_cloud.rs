//! Integration tests for tag cloud rendering.
//!
//! These exercise the public API the way a template helper would call it:
//! tags from the site index, options from the template, and a site context.

use serde_json::json;
use tagcloud::{RenderContext, RenderOptions, SiteContext, Tag, TagCollection, render_tag_cloud};

fn two_tags() -> Vec<Tag> {
    vec![Tag::new("a", "/a", 1), Tag::new("b", "/b", 5)]
}

fn anchor(href: &str, size: &str, name: &str) -> String {
    format!(
        r#"<a class="post-tag button" href="{href}" ref="tag" style="font-size: {size};">{name}</a>"#
    )
}

/// Resolves every tag path onto a CDN host.
struct CdnContext;

impl RenderContext for CdnContext {
    fn url_for(&self, path: &str) -> String {
        format!("https://cdn.example.com{path}")
    }
}

// ============================================================================
// Empty input
// ============================================================================

#[test]
fn empty_tags_render_nothing() {
    let site = SiteContext::default();
    assert_eq!(render_tag_cloud(Some(&[]), None, &site), "");
    assert_eq!(render_tag_cloud(None, None, &site), "");
    assert_eq!(
        render_tag_cloud(None, Some(&RenderOptions::default()), &CdnContext),
        ""
    );
}

#[test]
fn empty_site_collection_renders_nothing() {
    let site = SiteContext::default().with_tags(TagCollection::default());
    assert_eq!(render_tag_cloud(None, None, &site), "");
}

// ============================================================================
// Reference output
// ============================================================================

#[test]
fn renders_reference_example() {
    let options = RenderOptions::from_value(&json!({
        "min_font": 10,
        "max_font": 20,
        "orderby": "name",
        "order": 1,
        "unit": "px",
    }));

    let html = render_tag_cloud(Some(&two_tags()), Some(&options), &SiteContext::default());

    assert_eq!(
        html,
        format!(
            "{} {}",
            anchor("/a", "10.00px", "a"),
            anchor("/b", "20.00px", "b")
        )
    );
}

#[test]
fn amount_keeps_first_after_ordering() {
    let options = RenderOptions::new().with_amount(1);
    let html = render_tag_cloud(Some(&two_tags()), Some(&options), &SiteContext::default());
    assert_eq!(html, anchor("/a", "10.00px", "a"));

    let options = RenderOptions::new().with_order(-1).with_amount(1);
    let html = render_tag_cloud(Some(&two_tags()), Some(&options), &SiteContext::default());
    // A single remaining length ranks as the minimum.
    assert_eq!(html, anchor("/b", "10.00px", "b"));
}

#[test]
fn random_order_renders_every_tag() {
    let tags = vec![
        Tag::new("a", "/a", 1),
        Tag::new("b", "/b", 2),
        Tag::new("c", "/c", 3),
    ];
    let options = RenderOptions::new().with_orderby("random").with_separator(",");
    let html = render_tag_cloud(Some(&tags), Some(&options), &SiteContext::default());

    let mut fragments: Vec<&str> = html.split(',').collect();
    fragments.sort_unstable();
    assert_eq!(
        fragments,
        [
            anchor("/a", "10.00px", "a"),
            anchor("/b", "15.00px", "b"),
            anchor("/c", "20.00px", "c"),
        ]
    );
}

#[test]
fn output_follows_working_order_not_length_order() {
    let tags = vec![
        Tag::new("zeta", "/z", 1),
        Tag::new("alpha", "/a", 9),
        Tag::new("mid", "/m", 4),
    ];
    let html = render_tag_cloud(Some(&tags), None, &SiteContext::default());
    assert_eq!(
        html,
        [
            anchor("/a", "20.00px", "alpha"),
            anchor("/m", "15.00px", "mid"),
            anchor("/z", "10.00px", "zeta"),
        ]
        .join(" ")
    );
}

#[test]
fn names_sort_by_utf16_code_units() {
    let tags = vec![
        Tag::new("\u{FF61}", "/halfwidth", 1),
        Tag::new("\u{1F980}", "/crab", 2),
    ];
    let html = render_tag_cloud(Some(&tags), None, &SiteContext::default());
    assert_eq!(
        html,
        [
            anchor("/crab", "20.00px", "\u{1F980}"),
            anchor("/halfwidth", "10.00px", "\u{FF61}"),
        ]
        .join(" ")
    );
}

// ============================================================================
// Font size formatting
// ============================================================================

#[test]
fn halfway_min_font_rounds_up() {
    let options = RenderOptions::new().with_font_range(10.125, 20.0);
    let tags = [Tag::new("a", "/a", 1)];
    let html = render_tag_cloud(Some(&tags), Some(&options), &SiteContext::default());
    assert_eq!(html, anchor("/a", "10.13px", "a"));
}

#[test]
fn halfway_rank_sizes_round_up() {
    let tags: Vec<Tag> = (0..=80)
        .map(|i| Tag::new(format!("t{i:03}"), format!("/t{i:03}"), i))
        .collect();
    let html = render_tag_cloud(Some(&tags), None, &SiteContext::default());
    assert!(html.contains(&anchor("/t001", "10.13px", "t001")));
    assert!(html.contains(&anchor("/t080", "20.00px", "t080")));
}

// ============================================================================
// Context and options
// ============================================================================

#[test]
fn hrefs_come_from_context() {
    let tags = vec![Tag::new("rust", "/tags/rust/", 3)];
    let html = render_tag_cloud(Some(&tags), None, &CdnContext);
    assert_eq!(
        html,
        anchor("https://cdn.example.com/tags/rust/", "10.00px", "rust")
    );

    let html = render_tag_cloud(Some(&tags), None, &SiteContext::new("/blog"));
    assert!(html.contains(r#"href="/blog/tags/rust/""#));
}

#[test]
fn transform_and_unit_apply() {
    let options = RenderOptions::new()
        .with_unit("em")
        .with_font_range(1.0, 2.5)
        .with_transform(|name| format!("#{}", name.to_uppercase()));
    let html = render_tag_cloud(Some(&two_tags()), Some(&options), &SiteContext::default());
    assert_eq!(
        html,
        format!(
            "{} {}",
            anchor("/a", "1.00em", "#A"),
            anchor("/b", "2.50em", "#B")
        )
    );
}

#[test]
fn names_are_not_escaped_by_default() {
    let tags = vec![Tag::new("<script>x</script>", "/x", 1)];
    let html = render_tag_cloud(Some(&tags), None, &SiteContext::default());
    assert!(html.ends_with("><script>x</script></a>"));
}

#[test]
fn escape_html_option_encodes_names() {
    let tags = vec![Tag::new("<script>x</script>", "/x", 1)];
    let options = RenderOptions::from_value(&json!({ "escape_html": true }));
    let html = render_tag_cloud(Some(&tags), Some(&options), &SiteContext::default());
    assert!(html.contains(">&lt;script&gt;x&lt;/script&gt;</a>"));
}

#[test]
fn color_options_do_not_change_output() {
    let tags = two_tags();
    let site = SiteContext::default();
    let plain = render_tag_cloud(Some(&tags), None, &site);

    for (start, end) in [("#000", "#fff"), ("bogus", "#fff"), ("", "")] {
        let options = RenderOptions::new().with_colors(start, end);
        assert_eq!(render_tag_cloud(Some(&tags), Some(&options), &site), plain);
    }
}

#[test]
fn descending_length_with_ties_keeps_input_order() {
    let tags = vec![
        Tag::new("first", "/1", 2),
        Tag::new("big", "/b", 7),
        Tag::new("second", "/2", 2),
    ];
    let options = RenderOptions::new()
        .with_orderby("length")
        .with_order(-1)
        .with_separator("|");
    let html = render_tag_cloud(Some(&tags), Some(&options), &SiteContext::default());
    let names: Vec<&str> = html
        .split('|')
        .map(|a| &a[a.find("\">").unwrap() + 2..a.len() - "</a>".len()])
        .collect();
    assert_eq!(names, ["big", "first", "second"]);
}

#[test]
fn unknown_orderby_keeps_input_order() {
    let tags = vec![Tag::new("b", "/b", 1), Tag::new("a", "/a", 1)];
    let options = RenderOptions::new().with_orderby("date");
    let html = render_tag_cloud(Some(&tags), Some(&options), &SiteContext::default());
    assert!(html.starts_with(&anchor("/b", "10.00px", "b")));
}

#[test]
fn site_index_json_renders() {
    let index = r#"[
        {"name": "rust", "path": "tags/rust/", "length": 12},
        {"name": "go", "path": "tags/go/", "length": 3}
    ]"#;
    let tags: TagCollection = serde_json::from_str(index).unwrap();
    let site = SiteContext::new("/").with_tags(tags);

    let options = RenderOptions::from_value(&json!({ "orderby": "length", "order": -1 }));
    let html = render_tag_cloud(None, Some(&options), &site);
    assert_eq!(
        html,
        format!(
            "{} {}",
            anchor("/tags/rust/", "20.00px", "rust"),
            anchor("/tags/go/", "10.00px", "go")
        )
    );
}
