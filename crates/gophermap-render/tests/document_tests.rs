//! Document building tests over whole listings.

use gophermap_core::{parse, GopherIcon, ItemType};
use gophermap_render::{
    build, DisplayMode, DocumentBuilder, DocumentStyle, IconAlignment, RenderNode, StyleId,
};
use url::Url;

const LISTING: &[u8] = b"iWelcome to the example gopher server\t\tnull.host\t1\r\n\
i\t\tnull.host\t1\r\n\
1Phlog\t/phlog\r\n\
1Mirror\t/phlog\toctotherp.org\r\n\
1Mirror on 70\t/phlog\toctotherp.org\t70\r\n\
zUnknown type\t/z\r\n\
0Broken line\t/broken\n\
7Search\t/search\texample.org\t70\r\n\
9Archive\t/files/archive.zip\texample.org\t70\r\n";

fn base() -> Url {
    Url::parse("gopher://example.org/").unwrap()
}

fn interactive_count() -> usize {
    parse(LISTING)
        .iter()
        .filter(|item| item.item_type() != ItemType::Informational)
        .count()
}

#[test]
fn test_example_urls() {
    let doc = build(&parse(LISTING), &base(), DisplayMode::Graphical);
    let hrefs: Vec<_> = doc.links().map(|(_, href)| href).collect();

    assert_eq!(
        hrefs,
        vec![
            "gopher://example.org/phlog",
            "gopher://octotherp.org/1/phlog",
            "gopher://octotherp.org:70/1/phlog",
            "gopher://example.org:70/7/search",
            "gopher://example.org:70/9/files/archive.zip",
        ]
    );
}

#[test]
fn test_rendering_is_repeatable() {
    let builder = DocumentBuilder::new(base()).display_mode(DisplayMode::Graphical);
    let items = parse(LISTING);

    assert_eq!(builder.build(&items), builder.build(&items));
}

#[test]
fn test_text_only_never_emits_glyphs() {
    let doc = build(&parse(LISTING), &base(), DisplayMode::TextOnly);

    assert_eq!(doc.icon_count(), 0);
    assert!(doc.iter().all(|node| matches!(node, RenderNode::Text(_))));
}

#[test]
fn test_graphical_one_glyph_per_item() {
    let doc = build(&parse(LISTING), &base(), DisplayMode::Graphical);
    assert_eq!(doc.icon_count(), interactive_count());

    // Every glyph is followed by a spacer and then the anchored title
    let nodes = doc.nodes();
    for (idx, node) in nodes.iter().enumerate() {
        if let RenderNode::Icon(glyph) = node {
            assert_eq!(glyph.alignment(), IconAlignment::Top);
            assert_eq!(nodes[idx + 1].as_text().unwrap().text(), " ");
            assert!(nodes[idx + 2].as_text().unwrap().is_anchor());
        }
    }
}

#[test]
fn test_glyph_icons_follow_item_types() {
    let doc = build(&parse(LISTING), &base(), DisplayMode::Graphical);
    let icons: Vec<_> = doc
        .iter()
        .filter_map(RenderNode::as_icon)
        .map(|glyph| glyph.icon())
        .collect();

    assert_eq!(
        icons,
        vec![
            GopherIcon::Directory,
            GopherIcon::Directory,
            GopherIcon::Directory,
            GopherIcon::Search,
            GopherIcon::Binary,
        ]
    );
}

#[test]
fn test_informational_lines_are_plain() {
    let doc = build(&parse(LISTING), &base(), DisplayMode::Graphical);

    let first = doc.nodes()[0].as_text().unwrap();
    assert_eq!(first.text(), "Welcome to the example gopher server\n");
    assert_eq!(first.style(), StyleId::Standard);
    assert_eq!(first.href(), None);

    // An empty informational title still produces its newline
    assert_eq!(doc.nodes()[1].as_text().unwrap().text(), "\n");
}

#[test]
fn test_text_only_plain_text() {
    let doc = build(&parse(LISTING), &base(), DisplayMode::TextOnly);

    assert_eq!(
        doc.plain_text(),
        "Welcome to the example gopher server\n\
         \n\
         [directory] Phlog\n\
         [directory] Mirror\n\
         [directory] Mirror on 70\n\
         [search] Search\n\
         [binary] Archive\n"
    );
}

#[test]
fn test_links_use_internal_link_profile() {
    let style = DocumentStyle::default();
    let doc = DocumentBuilder::new(base()).style(style.clone()).build(&parse(LISTING));

    for run in doc.iter().filter_map(RenderNode::as_text) {
        if run.is_anchor() {
            assert_eq!(run.style(), StyleId::InternalLink);
            assert_eq!(
                doc.format_for(run.style()).color,
                style.internal_link_color
            );
        }
    }
}

#[test]
fn test_empty_and_garbage_input() {
    assert!(build(&parse(b""), &base(), DisplayMode::Graphical).is_empty());
    assert!(build(&parse(b"\r\n\r\n\t\t\r\n"), &base(), DisplayMode::Graphical).is_empty());
}
