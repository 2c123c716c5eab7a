//! End-to-end gophermap rendering.
//!
//! [`GophermapRenderer`] ties the pieces together: it registers the icon
//! images a graphical document needs, parses the raw listing and builds the
//! document.
//!
//! # Example
//!
//! ```
//! use gophermap_render::{DisplayMode, GophermapRenderer, RenderConfig, ResourceMap};
//! use url::Url;
//!
//! let renderer = GophermapRenderer::new(RenderConfig::new().display_mode(DisplayMode::TextOnly));
//! let base = Url::parse("gopher://example.org/").unwrap();
//! let mut store = ResourceMap::new();
//!
//! let doc = renderer.render(b"iWelcome\t\r\n0About\t/about.txt\r\n", &base, &mut store);
//! assert_eq!(doc.plain_text(), "Welcome\n[text] About\n");
//! assert!(store.is_empty());
//! ```

use std::fmt;

use gophermap_core::logging::{span_names, targets};
use gophermap_core::{MenuParser, PerfSpan};
use url::Url;

use crate::builder::{DisplayMode, DocumentBuilder};
use crate::config::RenderConfig;
use crate::document::Document;
use crate::error::RenderResult;
use crate::resources::{
    register_gopher_icons, try_register_gopher_icons, IconAssets, IconDirectory, ResourceStore,
};
use crate::style::DocumentStyle;

/// Renders raw gophermaps into documents according to a [`RenderConfig`].
pub struct GophermapRenderer {
    config: RenderConfig,
    parser: MenuParser,
    assets: Option<Box<dyn IconAssets + Send + Sync>>,
}

impl GophermapRenderer {
    /// Create a renderer.
    ///
    /// When the configuration names an icon directory, icons are loaded from
    /// it on every graphical render.
    pub fn new(config: RenderConfig) -> Self {
        let assets = config
            .icon_dir
            .clone()
            .map(|dir| Box::new(IconDirectory::new(dir)) as Box<dyn IconAssets + Send + Sync>);

        Self {
            config,
            parser: MenuParser::new(),
            assets,
        }
    }

    /// Create a renderer from a TOML or JSON configuration file.
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> RenderResult<Self> {
        Ok(Self::new(RenderConfig::load(path)?))
    }

    /// Use `assets` as the icon source, replacing any configured directory.
    pub fn with_assets(mut self, assets: impl IconAssets + Send + Sync + 'static) -> Self {
        self.assets = Some(Box::new(assets));
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The configured display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.config.display_mode
    }

    /// Whether an icon source is configured.
    pub fn has_assets(&self) -> bool {
        self.assets.is_some()
    }

    /// Register every icon from the configured source into `store`, failing
    /// on the first icon that cannot be loaded.
    ///
    /// Useful at startup to check that an icon directory is complete. Returns
    /// `Ok(0)` when no icon source is configured.
    pub fn preload_icons<S>(&self, store: &mut S) -> RenderResult<usize>
    where
        S: ResourceStore + ?Sized,
    {
        match &self.assets {
            Some(assets) => try_register_gopher_icons(store, assets.as_ref()),
            None => Ok(0),
        }
    }

    /// Render `raw` into a document, resolving local selectors against
    /// `base_url`.
    ///
    /// In graphical mode the gopher icons are registered into `store` first.
    /// Rendering never fails: malformed lines are skipped and icons that
    /// cannot be loaded are left unregistered.
    pub fn render<S>(&self, raw: &[u8], base_url: &Url, store: &mut S) -> Document
    where
        S: ResourceStore + ?Sized,
    {
        let _perf = PerfSpan::new(span_names::RENDER);

        if self.config.display_mode.uses_icon_resources() {
            match &self.assets {
                Some(assets) => {
                    register_gopher_icons(store, assets.as_ref());
                }
                None => {
                    tracing::debug!(
                        target: targets::RENDERER,
                        "no icon assets configured, glyphs will be unresolved"
                    );
                }
            }
        }

        let items = self.parser.parse(raw);
        let doc = DocumentBuilder::new(base_url.clone())
            .display_mode(self.config.display_mode)
            .style(self.config.style.clone())
            .build(&items);

        tracing::debug!(
            target: targets::RENDERER,
            bytes = raw.len(),
            items = items.len(),
            base = %base_url,
            "rendered gophermap"
        );
        doc
    }

    /// Render `raw` against a base URL given as a string.
    pub fn render_str<S>(&self, raw: &[u8], base_url: &str, store: &mut S) -> RenderResult<Document>
    where
        S: ResourceStore + ?Sized,
    {
        let base = Url::parse(base_url)?;
        Ok(self.render(raw, &base, store))
    }
}

impl Default for GophermapRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl fmt::Debug for GophermapRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GophermapRenderer")
            .field("config", &self.config)
            .field("has_assets", &self.assets.is_some())
            .finish()
    }
}

/// Render a gophermap with explicit parameters.
///
/// Registers the icons from `assets` into `store` when `display_mode` is
/// graphical, then parses `raw` and builds the document.
pub fn render_gophermap<S, A>(
    raw: &[u8],
    base_url: &Url,
    style: &DocumentStyle,
    display_mode: DisplayMode,
    store: &mut S,
    assets: &A,
) -> Document
where
    S: ResourceStore + ?Sized,
    A: IconAssets + ?Sized,
{
    let _perf = PerfSpan::new(span_names::RENDER);

    if display_mode.uses_icon_resources() {
        register_gopher_icons(store, assets);
    }

    let items = MenuParser::new().parse(raw);
    DocumentBuilder::new(base_url.clone())
        .display_mode(display_mode)
        .style(style.clone())
        .build(&items)
}
