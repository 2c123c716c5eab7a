//! Gophermap document rendering.
//!
//! This crate projects parsed gophermap entries into an abstract, styled
//! document that a text layout engine can lay out and make clickable:
//!
//! - **Style**: colors, fonts and the three text profiles a document uses
//! - **Document model**: ordered text runs, link targets and icon glyphs
//! - **Links**: destination URL construction for every menu entry
//! - **Resources**: registration of the gopher icon images into a caller's
//!   resource store
//! - **Configuration**: display mode, style and icon location, loadable from
//!   TOML or JSON
//!
//! # Example
//!
//! ```
//! use gophermap_render::{DisplayMode, GophermapRenderer, RenderConfig, ResourceMap};
//!
//! let renderer = GophermapRenderer::new(RenderConfig::new().display_mode(DisplayMode::TextOnly));
//! let mut store = ResourceMap::new();
//!
//! let doc = renderer
//!     .render_str(b"1Phlog\t/phlog\toctotherp.org\r\n", "gopher://example.org/", &mut store)
//!     .unwrap();
//!
//! let links: Vec<_> = doc.links().collect();
//! assert_eq!(links, vec![("Phlog\n", "gopher://octotherp.org/1/phlog")]);
//! ```

mod builder;
mod config;
mod document;
mod error;
mod link;
mod renderer;
mod resources;
mod style;

pub use builder::{build, DisplayMode, DocumentBuilder};
pub use config::{ConfigFormat, RenderConfig};
pub use document::{Document, IconAlignment, IconGlyph, RenderNode, TextRun};
pub use error::{AssetError, ConfigError, RenderError, RenderResult};
pub use link::{href_for, Href};
pub use renderer::{render_gophermap, GophermapRenderer};
pub use resources::{
    register_gopher_icons, try_register_gopher_icons, IconAssets, IconDirectory, ImageFormat,
    ImageResource, ResourceMap, ResourceStore, StaticIcons,
};
pub use style::{
    Color, DocumentStyle, FontFamily, FontSpec, StyleId, StyleProfiles, TextFormat,
};
