//! Projects parsed menu items into a [`Document`].
//!
//! Each informational item becomes a single plain text run. Every other item
//! becomes an icon (a real glyph in graphical mode, a bracketed name in text
//! mode) followed by the title as a link:
//!
//! ```text
//! Graphical:  [IconGlyph directory] " " <a href="gopher://...">Phlog\n</a>
//! TextOnly:   "[directory] "             <a href="gopher://...">Phlog\n</a>
//! ```
//!
//! The builder makes a single linear pass with no state carried between
//! items, so the same items always produce the same document.

use std::fmt;

use gophermap_core::logging::{span_names, targets};
use gophermap_core::{MenuItem, PerfSpan};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::document::{Document, IconAlignment, IconGlyph, TextRun};
use crate::error::RenderResult;
use crate::link::href_for;
use crate::style::{DocumentStyle, StyleId};

/// How item icons are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Inline icon glyphs backed by registered image resources.
    #[default]
    #[serde(rename = "icons", alias = "graphical")]
    Graphical,
    /// Bracketed icon names such as `[directory]`, no images needed.
    #[serde(rename = "text", alias = "text-only")]
    TextOnly,
}

impl DisplayMode {
    /// Map a stored display setting to a mode.
    ///
    /// Only the exact value `"text"` selects text mode; any other value,
    /// including an unset one, keeps the icons.
    pub fn from_setting(value: &str) -> Self {
        if value == "text" {
            DisplayMode::TextOnly
        } else {
            DisplayMode::Graphical
        }
    }

    /// The setting value this mode is stored as.
    pub fn as_setting(self) -> &'static str {
        match self {
            DisplayMode::Graphical => "icons",
            DisplayMode::TextOnly => "text",
        }
    }

    /// Whether icon images must be registered before rendering.
    pub fn uses_icon_resources(self) -> bool {
        matches!(self, DisplayMode::Graphical)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_setting())
    }
}

/// Builds documents from menu items.
///
/// # Example
///
/// ```
/// use gophermap_core::MenuParser;
/// use gophermap_render::{DisplayMode, DocumentBuilder};
///
/// let items = MenuParser::new().parse(b"1Phlog\t/phlog\toctotherp.org\r\n");
/// let builder = DocumentBuilder::from_base_str("gopher://example.org/")
///     .unwrap()
///     .display_mode(DisplayMode::TextOnly);
///
/// let doc = builder.build(&items);
/// assert_eq!(doc.plain_text(), "[directory] Phlog\n");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    base_url: Url,
    display_mode: DisplayMode,
    style: DocumentStyle,
    icon_alignment: IconAlignment,
}

impl DocumentBuilder {
    /// Create a builder resolving local selectors against `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            display_mode: DisplayMode::default(),
            style: DocumentStyle::default(),
            icon_alignment: IconAlignment::default(),
        }
    }

    /// Create a builder from a base URL string.
    pub fn from_base_str(base_url: &str) -> RenderResult<Self> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    /// Set the display mode.
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Set the style the document carries.
    pub fn style(mut self, style: DocumentStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the vertical alignment of icon glyphs in graphical mode.
    pub fn icon_alignment(mut self, alignment: IconAlignment) -> Self {
        self.icon_alignment = alignment;
        self
    }

    /// The base URL local selectors are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured display mode.
    pub fn mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Build a document from `items`, in order.
    pub fn build(&self, items: &[MenuItem]) -> Document {
        let _perf = PerfSpan::new(span_names::BUILD);

        let mut doc = Document::new(self.style.profiles(), self.style.margin);
        for item in items {
            self.push_item(&mut doc, item);
        }

        tracing::trace!(
            target: targets::BUILDER,
            items = items.len(),
            nodes = doc.len(),
            mode = %self.display_mode,
            "built gophermap document"
        );
        doc
    }

    fn push_item(&self, doc: &mut Document, item: &MenuItem) {
        let title = format!("{}\n", item.title());

        // Informational lines are the only non-interactive entries and the
        // only type without an icon.
        let Some(icon) = item.item_type().icon() else {
            doc.push_text(TextRun::new(title, StyleId::Standard));
            return;
        };

        debug_assert!(item.field_count() >= 2, "menu item without a selector");

        let href = href_for(item, &self.base_url);
        if !href.is_valid() {
            tracing::debug!(
                target: targets::BUILDER,
                title = item.title(),
                url = href.as_str(),
                "generated invalid URL"
            );
        }

        match self.display_mode {
            DisplayMode::TextOnly => {
                doc.push_text(TextRun::new(format!("[{}] ", icon.name()), StyleId::Standard));
            }
            DisplayMode::Graphical => {
                doc.push_icon(IconGlyph::new(icon).with_alignment(self.icon_alignment));
                doc.push_text(TextRun::new(" ", StyleId::Standard));
            }
        }

        doc.push_text(TextRun::anchored(
            title,
            StyleId::InternalLink,
            href.into_string(),
        ));
    }
}

/// Build a document with the default style.
pub fn build(items: &[MenuItem], base_url: &Url, display_mode: DisplayMode) -> Document {
    DocumentBuilder::new(base_url.clone())
        .display_mode(display_mode)
        .build(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RenderNode;
    use gophermap_core::{parse, GopherIcon, ItemType};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Build `items` with a debug-level subscriber and return the log lines
    /// about invalid URLs.
    fn invalid_url_logs(items: &[MenuItem]) -> Vec<String> {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            build(items, &base(), DisplayMode::TextOnly);
        });

        logs.lines()
            .into_iter()
            .filter(|line| line.contains("generated invalid URL"))
            .collect()
    }

    fn base() -> Url {
        Url::parse("gopher://example.org/").unwrap()
    }

    #[test]
    fn test_informational_is_plain_text() {
        let items = parse(b"iHello world\t\r\n");
        let doc = build(&items, &base(), DisplayMode::Graphical);

        assert_eq!(doc.len(), 1);
        let run = doc.nodes()[0].as_text().unwrap();
        assert_eq!(run.text(), "Hello world\n");
        assert_eq!(run.style(), StyleId::Standard);
        assert!(!run.is_anchor());
        assert_eq!(doc.icon_count(), 0);
    }

    #[test]
    fn test_graphical_item_nodes() {
        let items = parse(b"1Phlog\t/phlog\toctotherp.org\t70\r\n");
        let doc = build(&items, &base(), DisplayMode::Graphical);

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.nodes()[0].as_icon().unwrap().icon(), GopherIcon::Directory);

        let spacer = doc.nodes()[1].as_text().unwrap();
        assert_eq!(spacer.text(), " ");
        assert!(!spacer.is_anchor());

        let link = doc.nodes()[2].as_text().unwrap();
        assert_eq!(link.text(), "Phlog\n");
        assert_eq!(link.style(), StyleId::InternalLink);
        assert_eq!(link.href(), Some("gopher://octotherp.org:70/1/phlog"));
    }

    #[test]
    fn test_text_only_item_nodes() {
        let items = parse(b"1Phlog\t/phlog\toctotherp.org\r\n");
        let doc = build(&items, &base(), DisplayMode::TextOnly);

        assert_eq!(doc.len(), 2);
        let placeholder = doc.nodes()[0].as_text().unwrap();
        assert_eq!(placeholder.text(), "[directory] ");
        assert_eq!(placeholder.style(), StyleId::Standard);
        assert_eq!(
            doc.nodes()[1].as_text().unwrap().href(),
            Some("gopher://octotherp.org/1/phlog")
        );
    }

    #[test]
    fn test_local_selector_resolved() {
        let items = parse(b"1Phlog\t/phlog\r\n");
        let doc = build(&items, &base(), DisplayMode::TextOnly);
        let links: Vec<_> = doc.links().collect();
        assert_eq!(links, vec![("Phlog\n", "gopher://example.org/phlog")]);
    }

    #[test]
    fn test_invalid_url_still_attached() {
        let items = vec![
            MenuItem::new(ItemType::Text, "Broken", "/x")
                .with_host("example.org")
                .with_port("not-a-port"),
        ];
        let doc = build(&items, &base(), DisplayMode::TextOnly);
        let links: Vec<_> = doc.links().collect();
        assert_eq!(links, vec![("Broken\n", "gopher://example.org:not-a-port/0/x")]);
    }

    #[test]
    fn test_invalid_url_logged_at_debug() {
        let items = vec![
            MenuItem::new(ItemType::Text, "Broken", "/x")
                .with_host("example.org")
                .with_port("not-a-port"),
        ];

        let lines = invalid_url_logs(&items);
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(line.contains("DEBUG"), "{line}");
        assert!(line.contains(targets::BUILDER), "{line}");
        assert!(line.contains("gopher://example.org:not-a-port/0/x"), "{line}");
        assert!(line.contains("Broken"), "{line}");
    }

    #[test]
    fn test_valid_urls_not_logged() {
        let items = parse(b"1Phlog\t/phlog\r\n1Remote\t/phlog\toctotherp.org\t70\r\niInfo\t\r\n");
        assert_eq!(items.len(), 3);
        assert!(invalid_url_logs(&items).is_empty());
    }

    #[test]
    fn test_icon_alignment() {
        let items = parse(b"1Phlog\t/phlog\r\n");

        let default_doc = build(&items, &base(), DisplayMode::Graphical);
        assert_eq!(
            default_doc.nodes()[0].as_icon().unwrap().alignment(),
            IconAlignment::Top
        );

        let baseline_doc = DocumentBuilder::new(base())
            .icon_alignment(IconAlignment::Baseline)
            .build(&items);
        assert_eq!(
            baseline_doc.nodes()[0].as_icon().unwrap().alignment(),
            IconAlignment::Baseline
        );
    }

    #[test]
    fn test_every_icon_type_in_text_mode() {
        let raw = b"0a\ta\r\n1b\tb\r\n2c\tc\r\n3d\td\r\n4e\te\r\n5f\tf\r\n6g\tg\r\n\
                    7h\th\r\n8i\ti\r\n9j\tj\r\n+k\tk\r\ngl\tl\r\nIm\tm\r\nTn\tn\r\n\
                    ho\to\r\nsp\tp\r\n";
        let doc = build(&parse(raw), &base(), DisplayMode::TextOnly);

        let placeholders: Vec<_> = doc
            .iter()
            .filter_map(RenderNode::as_text)
            .filter(|run| !run.is_anchor())
            .map(|run| run.text().to_owned())
            .collect();
        assert_eq!(
            placeholders,
            vec![
                "[text] ",
                "[directory] ",
                "[dns] ",
                "[error] ",
                "[binary] ",
                "[binary] ",
                "[binary] ",
                "[search] ",
                "[telnet] ",
                "[binary] ",
                "[mirror] ",
                "[gif] ",
                "[image] ",
                "[telnet] ",
                "[html] ",
                "[sound] ",
            ]
        );
    }

    #[test]
    fn test_display_mode_setting() {
        assert_eq!(DisplayMode::from_setting("text"), DisplayMode::TextOnly);
        assert_eq!(DisplayMode::from_setting("icons"), DisplayMode::Graphical);
        assert_eq!(DisplayMode::from_setting(""), DisplayMode::Graphical);
        assert_eq!(DisplayMode::from_setting("TEXT"), DisplayMode::Graphical);
        assert!(DisplayMode::Graphical.uses_icon_resources());
        assert!(!DisplayMode::TextOnly.uses_icon_resources());
    }

    #[test]
    fn test_style_carried_through() {
        let style = DocumentStyle::default().with_margin(8.0);
        let doc = DocumentBuilder::new(base()).style(style.clone()).build(&[]);
        assert!(doc.is_empty());
        assert_eq!(doc.margin(), 8.0);
        assert_eq!(doc.profiles(), &style.profiles());
    }

    #[test]
    fn test_invalid_base_str() {
        assert!(DocumentBuilder::from_base_str("not a url").is_err());
    }
}
