//! Abstract document model produced from a gophermap.
//!
//! A [`Document`] is a flat, ordered list of [`RenderNode`]s: text runs that
//! refer to a style profile (optionally carrying a link target) and inline
//! icon glyphs. It holds everything a text layout engine needs to lay out
//! the listing and register clickable regions, but no pixels.
//!
//! Documents are only assembled by the crate's builder; once returned they
//! are read-only.

use gophermap_core::GopherIcon;

use crate::style::{StyleId, StyleProfiles, TextFormat};

/// A run of text drawn with one style profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    text: String,
    style: StyleId,
    href: Option<String>,
}

impl TextRun {
    /// Create an unanchored text run.
    pub fn new(text: impl Into<String>, style: StyleId) -> Self {
        Self {
            text: text.into(),
            style,
            href: None,
        }
    }

    /// Create a text run that links to `href`.
    pub fn anchored(text: impl Into<String>, style: StyleId, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
            href: Some(href.into()),
        }
    }

    /// The text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style profile this run uses.
    pub fn style(&self) -> StyleId {
        self.style
    }

    /// The link target, for anchored runs.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Whether this run is a link.
    pub fn is_anchor(&self) -> bool {
        self.href.is_some()
    }
}

/// Vertical placement of an inline icon relative to its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconAlignment {
    /// Align the top of the icon with the top of the line.
    #[default]
    Top,
    /// Align the icon with the text baseline.
    Baseline,
}

/// An inline icon, resolved to an image by the GUI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGlyph {
    icon: GopherIcon,
    alignment: IconAlignment,
}

impl IconGlyph {
    /// Create a top-aligned glyph for an icon.
    pub fn new(icon: GopherIcon) -> Self {
        Self {
            icon,
            alignment: IconAlignment::Top,
        }
    }

    /// Builder method to set the vertical alignment.
    pub fn with_alignment(mut self, alignment: IconAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The icon.
    pub fn icon(&self) -> GopherIcon {
        self.icon
    }

    /// The symbolic icon name.
    pub fn icon_name(&self) -> &'static str {
        self.icon.name()
    }

    /// The resource key the image is registered under.
    pub fn resource_key(&self) -> String {
        self.icon.resource_key()
    }

    /// Vertical alignment within the line.
    pub fn alignment(&self) -> IconAlignment {
        self.alignment
    }
}

/// One visual unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// Styled text, possibly a link.
    Text(TextRun),
    /// An inline icon.
    Icon(IconGlyph),
}

impl RenderNode {
    /// The text run, if this node is one.
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            RenderNode::Text(run) => Some(run),
            RenderNode::Icon(_) => None,
        }
    }

    /// The icon glyph, if this node is one.
    pub fn as_icon(&self) -> Option<&IconGlyph> {
        match self {
            RenderNode::Icon(glyph) => Some(glyph),
            RenderNode::Text(_) => None,
        }
    }
}

/// An immutable, ordered sequence of render nodes plus the style they use.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<RenderNode>,
    profiles: StyleProfiles,
    margin: f32,
}

impl Document {
    pub(crate) fn new(profiles: StyleProfiles, margin: f32) -> Self {
        Self {
            nodes: Vec::new(),
            profiles,
            margin,
        }
    }

    pub(crate) fn push_text(&mut self, run: TextRun) {
        self.nodes.push(RenderNode::Text(run));
    }

    pub(crate) fn push_icon(&mut self, glyph: IconGlyph) {
        self.nodes.push(RenderNode::Icon(glyph));
    }

    /// All nodes in order.
    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    /// Iterate over the nodes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RenderNode> {
        self.nodes.iter()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The text of every run concatenated, icons omitted.
    pub fn plain_text(&self) -> String {
        self.nodes
            .iter()
            .filter_map(RenderNode::as_text)
            .map(TextRun::text)
            .collect()
    }

    /// Anchored runs as `(text, href)` pairs, in document order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes
            .iter()
            .filter_map(RenderNode::as_text)
            .filter_map(|run| run.href().map(|href| (run.text(), href)))
    }

    /// Number of icon glyphs.
    pub fn icon_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.as_icon().is_some()).count()
    }

    /// The style profiles text runs refer to.
    pub fn profiles(&self) -> &StyleProfiles {
        &self.profiles
    }

    /// Resolve a style id against this document's profiles.
    pub fn format_for(&self, id: StyleId) -> &TextFormat {
        self.profiles.get(id)
    }

    /// Document margin in pixels.
    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a RenderNode;
    type IntoIter = std::slice::Iter<'a, RenderNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
